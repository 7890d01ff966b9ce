use std::path::Path;

use config::{Config, File, FileFormat};
use serde_derive::Deserialize;

mod default_config;
pub mod error;
pub mod layout;
pub mod light;

pub use error::{ConfigError, ConfigResult};
pub use layout::{LayoutConfig, LayoutTomlConfig};
pub use light::BacklightConfig;

/// Configurations of the bdn9 keymap, read from `keyboard.toml`.
#[derive(Clone, Debug, Deserialize)]
#[allow(unused)]
pub struct KeyboardTomlConfig {
    /// Basic keyboard info
    keyboard: KeyboardInfo,
    /// Matrix size and number of layers
    layout: LayoutTomlConfig,
    /// Rotary encoders, in index order
    #[serde(default)]
    encoder: Vec<EncoderTomlConfig>,
    /// Backlight config
    #[serde(default)]
    backlight: BacklightConfig,
}

impl KeyboardTomlConfig {
    /// Read `keyboard.toml` at the given path, on top of the default bdn9 config
    pub fn new_from_toml_path<P: AsRef<Path>>(config_toml_path: P) -> ConfigResult<Self> {
        let path = config_toml_path.as_ref().display().to_string();
        let content = std::fs::read_to_string(config_toml_path.as_ref()).map_err(|e| ConfigError::FileRead {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Self::parse(&content, &path)
    }

    /// Parse a `keyboard.toml` string, on top of the default bdn9 config
    pub fn new_from_toml_str(content: &str) -> ConfigResult<Self> {
        Self::parse(content, "keyboard.toml")
    }

    fn parse(content: &str, path: &str) -> ConfigResult<Self> {
        // The first run checks the syntax only, toml's messages point at the offending line
        toml::from_str::<toml::Table>(content).map_err(|e| ConfigError::TomlParse {
            path: path.to_string(),
            message: e.message().to_string(),
        })?;

        // The second run merges the user config with the default config
        let config: Self = Config::builder()
            .add_source(File::from_str(default_config::BDN9_DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ConfigError::TomlParse {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        self.layout.validate()?;
        self.backlight.validate()?;
        for (i, encoder) in self.encoder.iter().enumerate() {
            if self.encoder[..i].iter().any(|e| e.name == encoder.name) {
                return Err(ConfigError::Validation {
                    field: "encoder.name".to_string(),
                    message: format!("duplicate encoder name '{}'", encoder.name),
                });
            }
        }
        Ok(())
    }

    pub fn get_keyboard_info(&self) -> &KeyboardInfo {
        &self.keyboard
    }

    pub fn get_layout_config(&self) -> LayoutConfig {
        self.layout.get_layout_config()
    }

    pub fn get_encoder_config(&self) -> &[EncoderTomlConfig] {
        &self.encoder
    }

    pub fn get_backlight_config(&self) -> BacklightConfig {
        self.backlight.clone()
    }
}

/// Configurations for keyboard info
#[derive(Clone, Debug, Default, Deserialize)]
pub struct KeyboardInfo {
    /// Keyboard name
    pub name: String,
    /// Vender id
    pub vendor_id: u16,
    /// Product id
    pub product_id: u16,
    /// Manufacturer
    pub manufacturer: Option<String>,
    /// Product name, if not set, it will use `name` as default
    pub product_name: Option<String>,
}

impl KeyboardInfo {
    pub fn product_name(&self) -> &str {
        self.product_name.as_deref().unwrap_or(&self.name)
    }
}

/// A rotary encoder. The position in `[[encoder]]` is the encoder index.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct EncoderTomlConfig {
    pub name: String,
}
