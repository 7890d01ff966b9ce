pub mod common;

use bdn9::backlight::Backlight;
use bdn9::driver::PwmBacklight;
use bdn9::{BACKLIGHT_LEVELS, BREATHING_PERIOD};
use embassy_time::{Duration, Instant, MockDriver};

use crate::common::TestPwm;

const MAX_DUTY: u16 = 1500;

fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

#[test]
fn test_static_levels() {
    assert_eq!((BACKLIGHT_LEVELS, BREATHING_PERIOD), (3, 6));
    let mut backlight = PwmBacklight::new(TestPwm::new(MAX_DUTY), 3);
    assert_eq!(backlight.state().level(), 3);
    assert!(!backlight.state().is_breathing());

    backlight.set_level(1);
    assert_eq!(backlight.state().level(), 1);

    // Clamped to the highest level
    backlight.set_level(9);
    assert_eq!(backlight.state().level(), 3);
}

#[test]
fn test_static_duty_cycles() {
    let mut backlight = PwmBacklight::new(TestPwm::new(MAX_DUTY), 3);
    backlight.set_level(1);
    backlight.set_level(2);
    backlight.set_level(0);
    backlight.set_level(9);
    let duties = pwm_duties(backlight);
    assert_eq!(duties, [1500, 500, 1000, 0, 1500]);
}

#[test]
fn test_breathing_follows_triangle_wave() {
    let mut backlight = PwmBacklight::new(TestPwm::new(MAX_DUTY), 3);
    backlight.breathing_enable();
    for ms in [0, 1500, 3000, 4500, 6000, 7500] {
        backlight.tick(at(ms));
    }
    let duties = pwm_duties(backlight);
    // Initial static level, then the breathing cycle
    assert_eq!(duties, [1500, 0, 750, 1500, 750, 0, 750]);
}

#[test]
fn test_breathing_peaks_at_current_level() {
    let mut backlight = PwmBacklight::new(TestPwm::new(MAX_DUTY), 1);
    backlight.breathing_enable();
    backlight.tick(at(3000));
    assert_eq!(pwm_duties(backlight), [500, 500]);

    // Level 0 breathes at full brightness
    let mut backlight = PwmBacklight::new(TestPwm::new(MAX_DUTY), 0);
    backlight.breathing_enable();
    backlight.tick(at(3000));
    assert_eq!(pwm_duties(backlight), [0, 1500]);
}

#[test]
fn test_level_is_kept_while_breathing() {
    let mut backlight = PwmBacklight::new(TestPwm::new(MAX_DUTY), 3);
    backlight.breathing_enable();
    backlight.set_level(1);
    assert!(backlight.state().is_breathing());
    assert_eq!(backlight.state().level(), 1);

    // Stopping the breathing restores the static level
    backlight.breathing_disable();
    assert!(!backlight.state().is_breathing());
    assert_eq!(pwm_duties(backlight), [1500, 500]);
}

#[test]
fn test_tick_without_breathing_writes_nothing() {
    let mut backlight = PwmBacklight::new(TestPwm::new(MAX_DUTY), 2);
    backlight.tick(at(1500));
    backlight.tick(at(3000));
    assert_eq!(pwm_duties(backlight), [1000]);
}

#[test]
fn test_tick_now_uses_firmware_clock() {
    let mut backlight = PwmBacklight::new(TestPwm::new(MAX_DUTY), 3);
    backlight.breathing_enable();

    let driver = MockDriver::get();
    driver.reset();
    driver.advance(Duration::from_millis(1500));
    backlight.tick_now();
    driver.advance(Duration::from_millis(1500));
    backlight.tick_now();

    assert_eq!(pwm_duties(backlight), [1500, 750, 1500]);
}

fn pwm_duties(backlight: PwmBacklight<TestPwm>) -> Vec<u16> {
    backlight.into_pwm().duties
}
