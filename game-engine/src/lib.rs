#![cfg_attr(not(test), no_std)]
#![allow(async_fn_in_trait, reason = "single-threaded embassy executor")]

mod color;
pub mod config;
pub mod cue;
mod engine;
mod io;
mod sequence;

/// Longest sequence a player can be asked to repeat.
/// Replaying a sequence of this length wins the game.
pub const MAX_SEQUENCE_LENGTH: usize = 20;

pub use color::Color;
pub use config::GameConfig;
pub use cue::{Cue, CueNote};
pub use engine::{GameEngine, GameState};
pub use io::{Buzzer, Clock, Panel, RandomSource};
pub use sequence::{Sequence, SequenceError};

pub use embassy_time::{Duration, Instant};
