//! Rotary encoder handling.
//!
//! Each encoder step becomes exactly one tap of the action bound to the encoder on the active layer.
use strum::{EnumCount, FromRepr};

use crate::ENCODER_NAMES;
use crate::action::Action;
use crate::keymap::encoder_action;
use crate::layer::{Layer, LayerState};

/// The two encoders of the bdn9
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, FromRepr, EnumCount)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncoderId {
    Left = 0,
    Right = 1,
}

impl EncoderId {
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Name of the encoder in `keyboard.toml`
    pub const fn name(self) -> &'static str {
        ENCODER_NAMES[self.index()]
    }
}

/// The direction of one encoder step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// QMK-style `clockwise` flag to direction
    pub const fn from_clockwise(clockwise: bool) -> Self {
        if clockwise {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        }
    }
}

/// Result of an encoder event. The firmware's own encoder handling is skipped in both cases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncoderOutcome {
    /// Tap this action once
    Tap(Action),
    /// Nothing to send
    Ignored,
}

/// The action a step of `encoder` in `direction` sends on `layer`
pub fn layer_encoder_action(layer: Layer, encoder: EncoderId, direction: Direction) -> Option<Action> {
    let encoder_action = encoder_action(layer, encoder);
    let key_action = match direction {
        Direction::Clockwise => encoder_action.clockwise(),
        Direction::CounterClockwise => encoder_action.counter_clockwise(),
    };
    match key_action.to_action() {
        Action::No => None,
        action => Some(action),
    }
}

/// Process a step of encoder `index` with the firmware's current layer state
pub fn process_encoder(layer_state: LayerState, index: u8, direction: Direction) -> EncoderOutcome {
    let Some(encoder) = EncoderId::from_repr(index) else {
        warn!("Unknown encoder index {}", index);
        return EncoderOutcome::Ignored;
    };
    let Some(layer) = layer_state.active_layer() else {
        debug!("No keymap layer active in layer state {:#x}", layer_state.into_bits());
        return EncoderOutcome::Ignored;
    };

    match layer_encoder_action(layer, encoder, direction) {
        Some(action) => {
            debug!("Encoder {} {:?} on layer {:?}: {:?}", encoder.name(), direction, layer, action);
            EncoderOutcome::Tap(action)
        }
        None => EncoderOutcome::Ignored,
    }
}
