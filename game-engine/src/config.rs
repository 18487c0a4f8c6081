use embassy_time::Duration;

/// Timing of the game. Defaults match the reference board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// How long each LED stays lit in the attract animation.
    pub idle_tick: Duration,
    /// Pause after the start cue before the first color is shown.
    pub start_pause: Duration,
    /// How long a color's LED stays lit after its tone.
    pub color_hold: Duration,
    /// Tone length of a color, as a fraction of a whole note.
    pub color_tone_fraction: f32,
    /// Gap between colors while the sequence is revealed.
    pub step_gap: Duration,
    /// Pause after the player completes a round.
    pub round_gap: Duration,
    /// Button polling interval while waiting for the player.
    pub input_poll: Duration,
    /// Inactivity after which a game is abandoned.
    pub input_timeout: Duration,
    /// Hold after the win/lose cue.
    pub feedback_hold: Duration,
}

impl GameConfig {
    pub const DEFAULT: GameConfig = GameConfig {
        idle_tick: Duration::from_millis(500),
        start_pause: Duration::from_secs(1),
        color_hold: Duration::from_millis(30),
        color_tone_fraction: 0.5,
        step_gap: Duration::from_millis(100),
        round_gap: Duration::from_millis(500),
        input_poll: Duration::from_millis(50),
        input_timeout: Duration::from_secs(20),
        feedback_hold: Duration::from_secs(3),
    };
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
