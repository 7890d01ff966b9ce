//! Keyboard actions.
//!
//! Key types:
//! - [`Action`] - Single operations that the keypad sends or executes
//! - [`KeyAction`] - What a key position does, stored in the keymap
//! - [`EncoderAction`] - Rotary encoder actions, stored in the encoder map

use crate::keycode::HidKeyCode;
use crate::modifier::ModifierCombination;

/// EncoderAction is the action at a encoder position, stored in encoder_map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderAction {
    clockwise: KeyAction,
    counter_clockwise: KeyAction,
}

impl EncoderAction {
    /// Create a new encoder action.
    pub const fn new(clockwise: KeyAction, counter_clockwise: KeyAction) -> Self {
        Self {
            clockwise,
            counter_clockwise,
        }
    }

    /// Get the clockwise action.
    pub fn clockwise(&self) -> KeyAction {
        self.clockwise
    }

    /// Get the counter clockwise action.
    pub fn counter_clockwise(&self) -> KeyAction {
        self.counter_clockwise
    }
}

/// A KeyAction is the action at a keyboard position, stored in keymap.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// A single action, such as triggering a key, or switching a layer.
    Single(Action),
}

impl KeyAction {
    /// Convert `KeyAction` to the internal `Action`.
    /// Only valid for `Single` variant, returns `Action::No` for other variants.
    pub fn to_action(self) -> Action {
        match self {
            KeyAction::Single(a) => a,
            KeyAction::No => Action::No,
        }
    }
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Default action, no action.
    No,
    /// A normal key stroke, like QMK's `tap_code`.
    Key(HidKeyCode),
    /// Key stroke with modifier combination triggered, like QMK's `tap_code16`.
    KeyWithModifier(HidKeyCode, ModifierCombination),
    /// Activate a layer and deactivate all other layers, QMK's `TO(n)`.
    LayerToggleOnly(u8),
}
