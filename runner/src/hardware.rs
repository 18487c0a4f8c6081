use defmt::info;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use game_engine::Color;

/// Board wiring, indexed by `Color::index()`.
///
/// LEDs are the three user LEDs of the Nucleo board (the yellow one stands in
/// for blue). Buttons are wired to ground, so they use the internal pull-ups.
pub struct Hardware<'a> {
    pub leds: [Output<'a>; Color::COUNT],
    pub buttons: [Input<'a>; Color::COUNT],
    pub buzzer: Output<'a>,
}

impl<'a> Hardware<'a> {
    pub fn get() -> Hardware<'a> {
        info!("Initializing");
        let peripherals = embassy_stm32::init(Default::default());

        let red_led = Output::new(peripherals.PB14, Level::Low, Speed::Low);
        let green_led = Output::new(peripherals.PB0, Level::Low, Speed::Low);
        let blue_led = Output::new(peripherals.PE1, Level::Low, Speed::Low);

        let red_button = Input::new(peripherals.PA3, Pull::Up);
        let green_button = Input::new(peripherals.PC0, Pull::Up);
        let blue_button = Input::new(peripherals.PC3, Pull::Up);

        let buzzer = Output::new(peripherals.PA0, Level::Low, Speed::Low);

        Hardware {
            leds: [red_led, green_led, blue_led],
            buttons: [red_button, green_button, blue_button],
            buzzer,
        }
    }
}
