use embassy_time::{Duration, Instant, Timer};
use game_engine::Clock;

pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&mut self, duration: Duration) {
        Timer::after(duration).await
    }
}
