//! Engine configuration
//!
//! Tunables for the move selector. Everything has a default matching the
//! engine's standard behaviour, so callers only set what they want to change.

use crate::constants::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Calls up to and including this count may be answered from the opening book.
    /// Zero disables the book.
    pub opening_ply_limit: u32,

    /// King moves before this call count get the early-game king terms.
    pub early_game_limit: u32,

    /// At most this many non-king pieces on the board means endgame.
    pub endgame_piece_threshold: usize,

    /// Seed for the selector's random source. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            opening_ply_limit: OPENING_PLY_LIMIT,
            early_game_limit: EARLY_GAME_LIMIT,
            endgame_piece_threshold: ENDGAME_PIECE_THRESHOLD,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Default configuration with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}
