use defmt::Format;
use heapless::Vec;

use crate::Color;

#[derive(Format, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    CapacityExceeded,
}

/// Colors the player has to repeat, in order. Grows by one per round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence<const MAX_LENGTH: usize> {
    colors: Vec<Color, MAX_LENGTH>,
}

impl<const MAX_LENGTH: usize> Sequence<MAX_LENGTH> {
    pub const fn new() -> Self {
        Self { colors: Vec::new() }
    }

    pub fn push(&mut self, color: Color) -> Result<(), SequenceError> {
        self.colors
            .push(color)
            .map_err(|_| SequenceError::CapacityExceeded)
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.colors.len() == MAX_LENGTH
    }

    pub fn clear(&mut self) {
        self.colors.clear();
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }
}

impl<const MAX_LENGTH: usize> Default for Sequence<MAX_LENGTH> {
    fn default() -> Self {
        Self::new()
    }
}
