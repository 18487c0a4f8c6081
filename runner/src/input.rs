use embassy_stm32::gpio::{Input, Output};
use game_engine::{Color, Panel};

#[allow(dead_code)]
pub enum Polarity {
    ActiveLow,
    ActiveHigh,
}

pub struct Button<'a> {
    button: Input<'a>,
    polarity: Polarity,
}

impl<'a> Button<'a> {
    pub fn new(button: Input<'a>, polarity: Polarity) -> Button<'a> {
        Button { button, polarity }
    }

    pub fn is_pressed(&self) -> bool {
        match self.polarity {
            Polarity::ActiveHigh => self.button.is_high(),
            Polarity::ActiveLow => self.button.is_low(),
        }
    }
}

pub struct BoardPanel<'a> {
    leds: [Output<'a>; Color::COUNT],
    buttons: [Button<'a>; Color::COUNT],
}

impl<'a> BoardPanel<'a> {
    pub fn new(leds: [Output<'a>; Color::COUNT], buttons: [Button<'a>; Color::COUNT]) -> Self {
        Self { leds, buttons }
    }
}

impl Panel for BoardPanel<'_> {
    fn set_led(&mut self, color: Color, lit: bool) {
        let led = &mut self.leds[color.index()];
        if lit {
            led.set_high();
        } else {
            led.set_low();
        }
    }

    fn is_pressed(&mut self, color: Color) -> bool {
        self.buttons[color.index()].is_pressed()
    }
}
