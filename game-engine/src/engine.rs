use defmt::{Format, debug, info, trace};
use embassy_time::Instant;

use crate::{Buzzer, Clock, Color, Cue, GameConfig, Panel, RandomSource, Sequence};

#[derive(Format, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Attract animation, waiting for any button.
    Idle,
    StartGame,
    /// Replays the sequence so far and appends one new color.
    GenerateSequence,
    /// Waiting for the player to repeat the sequence.
    PlayerInput,
    GameOver,
    PlayerWins,
}

/// The Simon Says state machine.
///
/// Owns the collaborators and all game state. Call [`GameEngine::tick`] in a
/// loop; each call runs one step of the current state and suspends only while
/// sleeping or playing a tone.
pub struct GameEngine<P, B, C, R, const MAX_LENGTH: usize> {
    panel: P,
    buzzer: B,
    clock: C,
    random: R,
    config: GameConfig,
    state: GameState,
    sequence: Sequence<MAX_LENGTH>,
    round: usize,
    cursor: usize,
    // Set while a held button's press has already been counted.
    consumed: [bool; Color::COUNT],
    idle_phase: usize,
    last_activity: Instant,
}

impl<P, B, C, R, const MAX_LENGTH: usize> GameEngine<P, B, C, R, MAX_LENGTH>
where
    P: Panel,
    B: Buzzer,
    C: Clock,
    R: RandomSource,
{
    pub fn new(panel: P, buzzer: B, clock: C, random: R, config: GameConfig) -> Self {
        assert!(MAX_LENGTH > 0);

        let last_activity = clock.now();

        Self {
            panel,
            buzzer,
            clock,
            random,
            config,
            state: GameState::Idle,
            sequence: Sequence::new(),
            round: 0,
            cursor: 0,
            consumed: [false; Color::COUNT],
            idle_phase: 0,
            last_activity,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn round(&self) -> usize {
        self.round
    }

    /// Index of the next color the player has to press.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn sequence(&self) -> &[Color] {
        self.sequence.as_slice()
    }

    /// Position of the lit LED in the attract animation.
    pub fn idle_phase(&self) -> usize {
        self.idle_phase
    }

    /// Boot feedback: LEDs off and the start beep.
    pub async fn power_on(&mut self) {
        self.panel.all_leds_off();
        self.play_cue(Cue::Start).await;
    }

    /// Runs one step of the current state and returns the state that follows.
    pub async fn tick(&mut self) -> GameState {
        let next = match self.state {
            GameState::Idle => self.idle_tick().await,
            GameState::StartGame => self.start_game().await,
            GameState::GenerateSequence => self.generate_sequence().await,
            GameState::PlayerInput => self.player_input_tick().await,
            GameState::GameOver => self.feedback(Cue::Lose).await,
            GameState::PlayerWins => self.feedback(Cue::Win).await,
        };

        if next != self.state {
            info!("{} -> {} (round {})", self.state, next, self.round);
            if next == GameState::Idle {
                self.reset_game();
            }
            self.state = next;
        }

        self.state
    }

    async fn idle_tick(&mut self) -> GameState {
        self.panel.all_leds_off();

        if let Some(color) = self.first_pressed() {
            debug!("{} pressed, starting a game", color);
            let entropy = self
                .clock
                .now()
                .as_ticks()
                .wrapping_mul(color.index() as u64 + 1);
            self.random.reseed(entropy);
            return GameState::StartGame;
        }

        self.panel.set_led(Color::ALL[self.idle_phase], true);
        self.idle_phase = (self.idle_phase + 1) % Color::COUNT;
        self.clock.sleep(self.config.idle_tick).await;

        GameState::Idle
    }

    async fn start_game(&mut self) -> GameState {
        self.panel.all_leds_off();
        self.play_cue(Cue::Start).await;
        self.clock.sleep(self.config.start_pause).await;
        self.reset_game();

        GameState::GenerateSequence
    }

    async fn generate_sequence(&mut self) -> GameState {
        let revealed = self.sequence.clone();
        for &color in &revealed.as_slice()[..self.round] {
            self.show_color(color).await;
            self.clock.sleep(self.config.step_gap).await;
        }

        let color = Color::from_draw(self.random.next_in_range(Color::COUNT as u8));
        if let Err(err) = self.sequence.push(color) {
            info!("Cannot extend sequence: {}", err);
            return GameState::PlayerWins;
        }
        debug!("Round {} adds {}", self.round + 1, color);

        self.show_color(color).await;
        self.round += 1;
        self.clock.sleep(self.config.step_gap).await;

        self.cursor = 0;
        self.consumed = [false; Color::COUNT];
        self.last_activity = self.clock.now();

        GameState::PlayerInput
    }

    async fn player_input_tick(&mut self) -> GameState {
        let mut next = GameState::PlayerInput;

        for color in Color::ALL {
            let slot = color.index();

            if !self.panel.is_pressed(color) {
                self.consumed[slot] = false;
                continue;
            }
            if self.consumed[slot] {
                continue;
            }

            self.consumed[slot] = true;
            next = self.accept_press(color).await;
            break;
        }

        if next == GameState::PlayerInput {
            let idle_for = self
                .clock
                .now()
                .saturating_duration_since(self.last_activity);
            if idle_for >= self.config.input_timeout {
                info!("No input for {} ms, abandoning game", idle_for.as_millis());
                next = GameState::Idle;
            }
        }

        self.clock.sleep(self.config.input_poll).await;

        next
    }

    async fn accept_press(&mut self, color: Color) -> GameState {
        let expected = self.sequence.get(self.cursor);
        if expected != Some(color) {
            debug!("Pressed {} at step {}, expected {}", color, self.cursor, expected);
            return GameState::GameOver;
        }

        self.show_color(color).await;
        self.cursor += 1;
        self.last_activity = self.clock.now();

        if self.cursor < self.round {
            return GameState::PlayerInput;
        }
        if self.sequence.is_full() {
            return GameState::PlayerWins;
        }

        self.clock.sleep(self.config.round_gap).await;
        GameState::GenerateSequence
    }

    async fn feedback(&mut self, cue: Cue) -> GameState {
        self.play_cue(cue).await;
        self.clock.sleep(self.config.feedback_hold).await;

        GameState::Idle
    }

    fn first_pressed(&mut self) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|&color| self.panel.is_pressed(color))
    }

    fn reset_game(&mut self) {
        self.sequence.clear();
        self.round = 0;
        self.cursor = 0;
    }

    async fn show_color(&mut self, color: Color) {
        trace!("Showing {}", color);
        self.panel.set_led(color, true);
        self.buzzer
            .play_tone(color.tone_hz(), self.config.color_tone_fraction)
            .await;
        self.clock.sleep(self.config.color_hold).await;
        self.panel.set_led(color, false);
    }

    async fn play_cue(&mut self, cue: Cue) {
        trace!("Playing {} cue", cue);
        for note in cue.notes() {
            self.buzzer
                .play_tone(note.frequency_hz, note.duration_fraction)
                .await;
            self.clock.sleep(note.gap).await;
        }
    }
}
