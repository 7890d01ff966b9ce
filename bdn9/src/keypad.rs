//! Glue between the keyboard firmware and the bdn9 keymap.
//!
//! The firmware owns matrix scanning, the USB reports and the layer state. It calls
//! [`Keypad::encoder_update`] for every encoder step and [`Keypad::process_record`] for every
//! key event, the keymap answers through [`KeyHost`] and [`Backlight`].
use crate::action::{Action, KeyAction};
use crate::backlight::{self, Backlight};
use crate::encoder::{self, Direction, EncoderOutcome};
use crate::keymap;
use crate::layer::LayerState;
use crate::{MANUFACTURER, PRODUCT_ID, PRODUCT_NAME, VENDOR_ID};

/// Key primitives provided by the firmware
pub trait KeyHost {
    /// Current layer state
    fn layer_state(&self) -> LayerState;

    /// Press and release `action` immediately, like QMK's `tap_code16`
    fn tap(&mut self, action: Action);
}

/// The bdn9 keymap bound to the firmware's key and backlight primitives.
///
/// Holds no state of its own: the active layer is always read from the host.
pub struct Keypad<H: KeyHost, B: Backlight> {
    host: H,
    backlight: B,
}

impl<H: KeyHost, B: Backlight> Keypad<H, B> {
    pub fn new(host: H, backlight: B) -> Self {
        info!(
            "{} by {} ({:#x}:{:#x})",
            PRODUCT_NAME, MANUFACTURER, VENDOR_ID, PRODUCT_ID
        );
        Self { host, backlight }
    }

    /// Handle a step of encoder `index`.
    ///
    /// Always returns `false`, the firmware must not run its own encoder handling.
    pub fn encoder_update(&mut self, index: u8, clockwise: bool) -> bool {
        let direction = Direction::from_clockwise(clockwise);
        if let EncoderOutcome::Tap(action) = encoder::process_encoder(self.host.layer_state(), index, direction) {
            self.host.tap(action);
        }
        false
    }

    /// Observe a key event.
    ///
    /// Always returns `true`, the firmware processes every key as usual.
    pub fn process_record(&mut self, action: KeyAction, pressed: bool) -> bool {
        if let Some(command) = backlight::process_key(action, pressed) {
            self.backlight.apply(command);
        }
        true
    }

    /// The action at `(row, col)` on the active layer
    pub fn key_action(&self, row: usize, col: usize) -> Option<KeyAction> {
        let layer = self.host.layer_state().active_layer()?;
        keymap::key_action(layer, row, col)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn backlight(&self) -> &B {
        &self.backlight
    }

    pub fn backlight_mut(&mut self) -> &mut B {
        &mut self.backlight
    }

    pub fn into_parts(self) -> (H, B) {
        (self.host, self.backlight)
    }
}
