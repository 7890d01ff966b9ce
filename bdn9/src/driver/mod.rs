//! Drivers for the bdn9's on-board peripherals
pub mod pwm;

pub use pwm::PwmBacklight;
