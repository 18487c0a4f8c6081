use embassy_stm32::gpio::Output;
use embassy_time::{Duration, Instant, Ticker, Timer};
use game_engine::Buzzer;

/// Length of a tone with `duration_fraction == 1.0`.
const WHOLE_NOTE: Duration = Duration::from_secs(1);

/// Passive buzzer driven by toggling a GPIO at the tone frequency.
pub struct PinBuzzer<'a> {
    pin: Output<'a>,
}

impl<'a> PinBuzzer<'a> {
    pub fn new(pin: Output<'a>) -> Self {
        Self { pin }
    }
}

impl Buzzer for PinBuzzer<'_> {
    async fn play_tone(&mut self, frequency_hz: f32, duration_fraction: f32) {
        let length =
            Duration::from_micros((WHOLE_NOTE.as_micros() as f32 * duration_fraction) as u64);

        // Non-positive frequencies are rests.
        if frequency_hz <= 0.0 {
            Timer::after(length).await;
            return;
        }

        let half_period = Duration::from_micros((500_000.0 / frequency_hz) as u64);
        let end = Instant::now() + length;
        let mut ticker = Ticker::every(half_period);

        while Instant::now() < end {
            self.pin.toggle();
            ticker.next().await;
        }

        self.pin.set_low();
    }
}
