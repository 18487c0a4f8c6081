use defmt::Format;

use crate::cue::note;

/// One LED/button/tone triple on the board.
#[derive(Format, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    pub const COUNT: usize = 3;

    /// Scan order. Buttons are always checked in this order, so when several
    /// are held at once the earliest one wins.
    pub const ALL: [Color; Color::COUNT] = [Color::Red, Color::Green, Color::Blue];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Maps a random draw onto a color. Draws outside `0..COUNT` wrap around.
    pub const fn from_draw(draw: u8) -> Color {
        Color::ALL[draw as usize % Color::COUNT]
    }

    /// Frequency played while this color is shown or pressed.
    pub const fn tone_hz(self) -> f32 {
        match self {
            Color::Red => note::G4,
            Color::Green => note::C4,
            Color::Blue => note::E4,
        }
    }
}
