//! Backlight indication of the layer switched to.
//!
//! Music breathes, the brushes layer is dim and the text layer is bright.
//! This only looks at key events, the firmware still handles every key itself.
use crate::action::{Action, KeyAction};
use crate::layer::Layer;
use crate::{BACKLIGHT_LEVELS, BRIGHT_LEVEL, DIM_LEVEL};

/// Backlight primitives provided by the firmware
pub trait Backlight {
    /// Start the breathing effect
    fn breathing_enable(&mut self);

    /// Stop the breathing effect
    fn breathing_disable(&mut self);

    /// Set a static brightness level, `0..=BACKLIGHT_LEVELS`
    fn set_level(&mut self, level: u8);

    /// Run a command through the primitives above
    fn apply(&mut self, command: BacklightCommand) {
        match command {
            BacklightCommand::Breathing => self.breathing_enable(),
            BacklightCommand::Static(level) => {
                self.breathing_disable();
                self.set_level(level);
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BacklightCommand {
    /// Enable breathing, the level is left as is
    Breathing,
    /// Disable breathing and set the level
    Static(u8),
}

/// Backlight mode of each layer
pub const fn layer_backlight(layer: Layer) -> BacklightCommand {
    match layer {
        Layer::Music => BacklightCommand::Breathing,
        Layer::PsBrushes => BacklightCommand::Static(DIM_LEVEL),
        Layer::AiText => BacklightCommand::Static(BRIGHT_LEVEL),
    }
}

/// Backlight command for a key event.
///
/// Only the press of a `TO(n)` key to a keymap layer changes the backlight.
pub fn process_key(action: KeyAction, pressed: bool) -> Option<BacklightCommand> {
    if !pressed {
        return None;
    }
    match action {
        KeyAction::Single(Action::LayerToggleOnly(layer_num)) => {
            let Some(layer) = Layer::from_number(layer_num) else {
                debug!("TO({}) is not a keymap layer, backlight unchanged", layer_num);
                return None;
            };
            let command = layer_backlight(layer);
            info!("Switching to {:?}, backlight {:?}", layer, command);
            Some(command)
        }
        _ => None,
    }
}

/// In-memory backlight state: the static level and whether breathing is on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BacklightState {
    level: u8,
    breathing: bool,
}

impl Default for BacklightState {
    fn default() -> Self {
        Self {
            level: BACKLIGHT_LEVELS,
            breathing: false,
        }
    }
}

impl BacklightState {
    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn is_breathing(&self) -> bool {
        self.breathing
    }
}

impl Backlight for BacklightState {
    fn breathing_enable(&mut self) {
        self.breathing = true;
    }

    fn breathing_disable(&mut self) {
        self.breathing = false;
    }

    fn set_level(&mut self, level: u8) {
        self.level = level.min(BACKLIGHT_LEVELS);
    }
}
