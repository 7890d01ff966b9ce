use serde_derive::Deserialize;
use serde_inline_default::serde_inline_default;

use crate::{ConfigError, ConfigResult};

/// Highest backlight level a single PWM channel is driven with
pub const MAX_BACKLIGHT_LEVELS: u8 = 15;

/// `[backlight]` section of `keyboard.toml`
#[serde_inline_default]
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BacklightConfig {
    /// Number of brightness steps above off
    #[serde_inline_default(3)]
    pub levels: u8,
    /// Duration of one breathing cycle, in seconds
    #[serde_inline_default(6)]
    pub breathing_period: u8,
    /// Static level used on the brushes layer
    #[serde_inline_default(1)]
    pub dim_level: u8,
    /// Static level used on the text layer
    #[serde_inline_default(3)]
    pub bright_level: u8,
}

/// This separate Default impl is needed when `[backlight]` section is not set in keyboard.toml
impl Default for BacklightConfig {
    fn default() -> Self {
        Self {
            levels: 3,
            breathing_period: 6,
            dim_level: 1,
            bright_level: 3,
        }
    }
}

impl BacklightConfig {
    pub(crate) fn validate(&self) -> ConfigResult<()> {
        if self.levels == 0 || self.levels > MAX_BACKLIGHT_LEVELS {
            return Err(ConfigError::invalid_value(
                "backlight.levels",
                self.levels,
                "a number between 1 and 15",
            ));
        }
        if self.breathing_period == 0 {
            return Err(ConfigError::invalid_value(
                "backlight.breathing_period",
                self.breathing_period,
                "at least 1 second",
            ));
        }
        for (field, level) in [
            ("backlight.dim_level", self.dim_level),
            ("backlight.bright_level", self.bright_level),
        ] {
            if level > self.levels {
                return Err(ConfigError::Validation {
                    field: field.to_string(),
                    message: format!("level {} is above `backlight.levels` ({})", level, self.levels),
                });
            }
        }
        Ok(())
    }
}
