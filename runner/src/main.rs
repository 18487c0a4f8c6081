#![no_std]
#![no_main]

mod buzzer;
mod clock;
mod game_task;
mod hardware;
mod input;
mod random;

use defmt::info;
use embassy_executor::Executor;
use static_cell::StaticCell;

use defmt_rtt as _;
use panic_probe as _;

static EXECUTOR: StaticCell<Executor> = StaticCell::new();

#[cortex_m_rt::entry]
fn main() -> ! {
    info!("Setting up hardware");
    let hardware = hardware::Hardware::get();

    info!("Setting up executor");
    let executor = EXECUTOR.init(embassy_executor::Executor::new());

    executor.run(|spawner| {
        info!("Spawning game task");
        spawner.spawn(game_task::create_task(hardware)).unwrap();
    })
}
