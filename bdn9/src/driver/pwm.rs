use embassy_time::{Duration, Instant};
use embedded_hal::pwm::SetDutyCycle;

use crate::backlight::{Backlight, BacklightState};
use crate::{BACKLIGHT_LEVELS, BREATHING_PERIOD};

/// Backlight LED driven by a single PWM channel.
///
/// Static levels are written as soon as they're set. While breathing, the firmware calls
/// [`PwmBacklight::tick`] periodically and the duty follows a triangle wave peaking at the
/// current level, or at full brightness when the level is 0.
pub struct PwmBacklight<P: SetDutyCycle> {
    pwm: P,
    state: BacklightState,
}

impl<P: SetDutyCycle> PwmBacklight<P> {
    /// Create a new backlight with a static `level`
    pub fn new(pwm: P, level: u8) -> Self {
        let mut backlight = Self {
            pwm,
            state: BacklightState::default(),
        };
        backlight.set_level(level);
        backlight
    }

    pub fn state(&self) -> BacklightState {
        self.state
    }

    /// Release the PWM channel
    pub fn into_pwm(self) -> P {
        self.pwm
    }

    /// Update the breathing effect, `now` decides the position in the breathing cycle
    pub fn tick(&mut self, now: Instant) {
        if !self.state.is_breathing() {
            return;
        }
        let period = Duration::from_secs(BREATHING_PERIOD as u64).as_millis();
        let half = period / 2;
        let phase = now.as_millis() % period;
        let rise = if phase < half { phase } else { period - phase };
        let permille = (rise * 1000 / half) as u16;

        let peak = if self.state.level() == 0 {
            BACKLIGHT_LEVELS
        } else {
            self.state.level()
        };
        self.write_fraction(peak as u16 * permille, BACKLIGHT_LEVELS as u16 * 1000);
    }

    /// Same as [`PwmBacklight::tick`], with the current time
    pub fn tick_now(&mut self) {
        self.tick(Instant::now());
    }

    fn write_level(&mut self) {
        self.write_fraction(self.state.level() as u16, BACKLIGHT_LEVELS as u16);
    }

    fn write_fraction(&mut self, num: u16, denom: u16) {
        trace!("Backlight duty {}/{}", num, denom);
        self.pwm.set_duty_cycle_fraction(num, denom).ok();
    }
}

impl<P: SetDutyCycle> Backlight for PwmBacklight<P> {
    fn breathing_enable(&mut self) {
        self.state.breathing_enable();
    }

    fn breathing_disable(&mut self) {
        self.state.breathing_disable();
        self.write_level();
    }

    fn set_level(&mut self, level: u8) {
        self.state.set_level(level);
        if !self.state.is_breathing() {
            self.write_level();
        }
    }
}
