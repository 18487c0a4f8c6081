use embassy_time::{Duration, Instant};

use crate::Color;

/// LEDs and buttons, addressed by color.
///
/// Pin direction is fixed when the implementation is built, so the engine only
/// drives levels and reads buttons. Button polarity is the implementation's
/// concern: `is_pressed` must already account for active-low wiring.
pub trait Panel {
    fn set_led(&mut self, color: Color, lit: bool);
    fn is_pressed(&mut self, color: Color) -> bool;

    fn all_leds_off(&mut self) {
        for color in Color::ALL {
            self.set_led(color, false);
        }
    }
}

pub trait Buzzer {
    /// Plays a tone and returns once it has finished.
    /// `duration_fraction` is relative; the buzzer decides the absolute length.
    async fn play_tone(&mut self, frequency_hz: f32, duration_fraction: f32);
}

pub trait Clock {
    fn now(&self) -> Instant;
    async fn sleep(&mut self, duration: Duration);
}

pub trait RandomSource {
    /// Uniform value in `0..upper`.
    fn next_in_range(&mut self, upper: u8) -> u8;

    /// Called once per game with a value that varies with the moment the player
    /// pressed start. Sources that seed themselves may ignore it.
    fn reseed(&mut self, _entropy: u64) {}
}
