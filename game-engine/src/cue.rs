use defmt::Format;
use embassy_time::Duration;

/// Note frequencies in Hz.
pub mod note {
    pub const G3: f32 = 196.00;
    pub const A3: f32 = 220.00;
    pub const C4: f32 = 261.63;
    pub const E4: f32 = 329.63;
    pub const G4: f32 = 392.00;
    pub const B4: f32 = 493.88;
}

#[derive(Format, Debug, Clone, Copy, PartialEq)]
pub struct CueNote {
    pub frequency_hz: f32,
    /// Fraction of a whole note, scaled by the buzzer.
    pub duration_fraction: f32,
    /// Silence after the note.
    pub gap: Duration,
}

impl CueNote {
    const fn new(frequency_hz: f32, duration_fraction: f32, gap_ms: u64) -> Self {
        Self {
            frequency_hz,
            duration_fraction,
            gap: Duration::from_millis(gap_ms),
        }
    }
}

const START_NOTES: [CueNote; 2] = [
    CueNote::new(note::G4, 0.25, 30),
    CueNote::new(note::G4, 0.25, 30),
];

const WIN_NOTES: [CueNote; 3] = [
    CueNote::new(note::G3, 0.5, 100),
    CueNote::new(note::A3, 0.5, 100),
    CueNote::new(note::B4, 0.5, 100),
];

const LOSE_NOTES: [CueNote; 3] = [
    CueNote::new(note::B4, 0.5, 100),
    CueNote::new(note::A3, 0.5, 100),
    CueNote::new(note::G3, 0.5, 100),
];

/// Fixed feedback sounds.
#[derive(Format, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Short double beep, played at power-on and when a game starts.
    Start,
    Win,
    Lose,
}

impl Cue {
    pub fn notes(self) -> &'static [CueNote] {
        match self {
            Cue::Start => &START_NOTES,
            Cue::Win => &WIN_NOTES,
            Cue::Lose => &LOSE_NOTES,
        }
    }
}
