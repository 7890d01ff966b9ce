use serde_derive::Deserialize;

use crate::{ConfigError, ConfigResult};

/// Maximum number of layers, the layer state is a 32-bit mask
pub const MAX_LAYERS: u8 = 32;

/// `[layout]` section of `keyboard.toml`
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutTomlConfig {
    pub rows: u8,
    pub cols: u8,
    pub layers: u8,
}

/// Matrix size and layer number the keymap is compiled against
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    pub rows: u8,
    pub cols: u8,
    pub layers: u8,
}

impl LayoutTomlConfig {
    pub(crate) fn validate(&self) -> ConfigResult<()> {
        if self.rows == 0 {
            return Err(ConfigError::invalid_value("layout.rows", self.rows, "at least 1"));
        }
        if self.cols == 0 {
            return Err(ConfigError::invalid_value("layout.cols", self.cols, "at least 1"));
        }
        if self.layers == 0 || self.layers > MAX_LAYERS {
            return Err(ConfigError::invalid_value(
                "layout.layers",
                self.layers,
                "a number between 1 and 32",
            ));
        }
        Ok(())
    }

    pub(crate) fn get_layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            rows: self.rows,
            cols: self.cols,
            layers: self.layers,
        }
    }
}
