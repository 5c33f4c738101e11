//! Table configuration.
//!
//! Animation pacing and deal sizes are data, not code: embedding
//! applications tune them at startup instead of patching action
//! constructors.

use serde::{Deserialize, Serialize};

/// Configuration for a card table.
///
/// The defaults match the classic table: seven starting cards, one-second
/// draws, snappy plays, a two-cycle opening shuffle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards dealt to each hand pile at the start of a game.
    pub starting_cards: usize,

    /// Seconds a drawn card spends travelling from the deck to its pile.
    pub draw_duration: f32,

    /// Seconds a played card spends travelling to the middle pile.
    pub play_duration: f32,

    /// Seconds of quiet before the opening shuffle begins.
    pub opening_delay: f32,

    /// Number of split/riffle/stack cycles in the opening shuffle.
    pub shuffle_cycles: u32,

    /// Seconds per shuffle cycle.
    pub shuffle_cycle_duration: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_cards: 7,
            draw_duration: 1.0,
            play_duration: 0.3,
            opening_delay: 1.0,
            shuffle_cycles: 2,
            shuffle_cycle_duration: 0.8,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the default pacing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting hand size.
    #[must_use]
    pub fn with_starting_cards(mut self, count: usize) -> Self {
        self.starting_cards = count;
        self
    }

    /// Set the draw animation duration.
    #[must_use]
    pub fn with_draw_duration(mut self, seconds: f32) -> Self {
        self.draw_duration = seconds;
        self
    }

    /// Set the play animation duration.
    #[must_use]
    pub fn with_play_duration(mut self, seconds: f32) -> Self {
        self.play_duration = seconds;
        self
    }

    /// Set the opening shuffle shape.
    #[must_use]
    pub fn with_shuffle(mut self, cycles: u32, cycle_duration: f32) -> Self {
        self.shuffle_cycles = cycles;
        self.shuffle_cycle_duration = cycle_duration;
        self
    }
}
