#![allow(dead_code)]

use core::convert::Infallible;

use bdn9::action::Action;
use bdn9::backlight::Backlight;
use bdn9::keypad::{KeyHost, Keypad};
use bdn9::layer::LayerState;
use embedded_hal::pwm::{ErrorType, SetDutyCycle};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Firmware stand-in: keeps a layer state and records every tap
#[derive(Debug, Default)]
pub struct TestHost {
    pub layer_state: LayerState,
    pub taps: Vec<Action>,
}

impl TestHost {
    pub fn on_layer(layer: u8) -> Self {
        Self {
            layer_state: LayerState::to(layer),
            taps: Vec::new(),
        }
    }
}

impl KeyHost for TestHost {
    fn layer_state(&self) -> LayerState {
        self.layer_state
    }

    fn tap(&mut self, action: Action) {
        self.taps.push(action);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BacklightCall {
    BreathingEnable,
    BreathingDisable,
    SetLevel(u8),
}

/// Records every backlight primitive called
#[derive(Debug, Default)]
pub struct TestBacklight {
    pub calls: Vec<BacklightCall>,
}

impl Backlight for TestBacklight {
    fn breathing_enable(&mut self) {
        self.calls.push(BacklightCall::BreathingEnable);
    }

    fn breathing_disable(&mut self) {
        self.calls.push(BacklightCall::BreathingDisable);
    }

    fn set_level(&mut self, level: u8) {
        self.calls.push(BacklightCall::SetLevel(level));
    }
}

pub fn keypad_on_layer(layer: u8) -> Keypad<TestHost, TestBacklight> {
    Keypad::new(TestHost::on_layer(layer), TestBacklight::default())
}

/// PWM channel that records the duty cycles written
#[derive(Debug)]
pub struct TestPwm {
    pub max_duty: u16,
    pub duties: Vec<u16>,
}

impl TestPwm {
    pub fn new(max_duty: u16) -> Self {
        Self {
            max_duty,
            duties: Vec::new(),
        }
    }

    pub fn last_duty(&self) -> Option<u16> {
        self.duties.last().copied()
    }
}

impl ErrorType for TestPwm {
    type Error = Infallible;
}

impl SetDutyCycle for TestPwm {
    fn max_duty_cycle(&self) -> u16 {
        self.max_duty
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duties.push(duty);
        Ok(())
    }
}
