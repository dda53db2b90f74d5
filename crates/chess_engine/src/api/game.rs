//! Game lifecycle management
//!
//! A [`Game`] bundles everything one game needs: the position, whose turn it
//! is, the move history and one selector per side. Games share nothing, so
//! any number of them can run side by side.

use crate::board::Position;
use crate::config::EngineConfig;
use crate::constants::*;
use crate::search::MoveSelector;
use crate::types::*;

pub struct Game {
    pub position: Position,
    pub side_to_move: Color,
    pub last_move: Option<Move>,
    pub history: Vec<Move>,
    pub(crate) config: EngineConfig,
    pub(crate) white: MoveSelector,
    pub(crate) black: MoveSelector,
}

impl Game {
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of half-moves played
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    pub fn selector(&self, color: Color) -> &MoveSelector {
        if color == COLOR_WHITE {
            &self.white
        } else {
            &self.black
        }
    }

    pub(crate) fn selector_mut(&mut self, color: Color) -> &mut MoveSelector {
        if color == COLOR_WHITE {
            &mut self.white
        } else {
            &mut self.black
        }
    }
}

/// Selector configs for both sides; Black's seed is offset so the two sides
/// do not mirror each other's random choices
pub(crate) fn side_configs(config: &EngineConfig) -> (EngineConfig, EngineConfig) {
    let black = EngineConfig {
        seed: config.seed.map(|seed| seed.wrapping_add(1)),
        ..config.clone()
    };
    (config.clone(), black)
}

/// Create a new game with initial position
pub fn new_game(config: EngineConfig) -> Game {
    let (white, black) = side_configs(&config);
    Game {
        position: Position::starting(),
        side_to_move: FIRST_SIDE,
        last_move: None,
        history: Vec::new(),
        white: MoveSelector::new(white),
        black: MoveSelector::new(black),
        config,
    }
}

/// Reset the game to starting position
///
/// Selector random streams carry on; only their per-game state is cleared.
pub fn reset_game(game: &mut Game) {
    game.position = Position::starting();
    game.side_to_move = FIRST_SIDE;
    game.last_move = None;
    game.history.clear();
    game.white.reset();
    game.black.reset();
}
