//! # bdn9
//!
//! Keymap of a Keebio bdn9 macropad for Photoshop and Illustrator, with music controls.
//!
//! ## Modules
//!
//! - [`keymap`] - The 3 layers of the 3x3 matrix and the encoder map
//! - [`encoder`] - Encoder steps to key taps, per layer
//! - [`backlight`] - Backlight indication of the layer switched to
//! - [`keypad`] - Glue between the firmware and the handlers above
//! - [`driver`] - PWM backlight driver
//!
//! Matrix size, layer count and backlight levels are read from `keyboard.toml` at build time.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod action;
pub mod backlight;
pub mod driver;
pub mod encoder;
pub mod keycode;
pub mod keymap;
pub mod keypad;
pub mod layer;
pub mod layout_macro;
pub mod modifier;

pub use backlight::{Backlight, BacklightCommand, BacklightState};
pub use encoder::{Direction, EncoderId, EncoderOutcome};
pub use keypad::{KeyHost, Keypad};
pub use layer::{Layer, LayerState};

// Generated from keyboard.toml
include!(concat!(env!("OUT_DIR"), "/constants.rs"));
