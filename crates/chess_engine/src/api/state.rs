//! Game state queries, engine replies and snapshots
//!
//! A [`GameSnapshot`] is the serializable form of a [`Game`]: board, turn,
//! history and both selectors' saved state. Persistence and network code
//! ship snapshots around and rebuild games with [`restore_game`].

use super::game::{side_configs, Game};
use crate::board::Position;
use crate::config::EngineConfig;
use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::move_gen::{find_king, generate_candidate_moves, is_in_check};
use crate::search::{MoveSelector, SelectorState};
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Where a game stands from the side to move's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing { in_check: bool },
    /// The side to move has nothing to move. Whether that is mate or
    /// stalemate is for the caller to decide.
    NoMoves { in_check: bool },
    /// The side to move has lost its king
    KingCaptured { winner: Color },
}

impl GameState {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameState::Playing { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// 64 row-major squares, row 0 first
    pub board: Vec<i8>,
    pub side_to_move: Color,
    pub last_move: Option<Move>,
    #[serde(default)]
    pub history: Vec<Move>,
    pub white: SelectorState,
    pub black: SelectorState,
}

/// Get AI's response to current position
///
/// Asks the side to move's selector; `None` when that side has no move.
/// The move is not played, use [`super::do_move`] for that.
pub fn reply(game: &mut Game) -> Option<Move> {
    let color = game.side_to_move;
    let Game {
        position,
        white,
        black,
        ..
    } = game;
    let selector = if color == COLOR_WHITE { white } else { black };
    selector.select_move(position, color)
}

/// Get current game state for the side to move
pub fn get_game_state(game: &Game) -> GameState {
    let color = game.side_to_move;

    if find_king(&game.position, color).is_none() {
        return GameState::KingCaptured { winner: -color };
    }

    let in_check = is_in_check(&game.position, color);
    if generate_candidate_moves(&game.position, color).is_empty() {
        GameState::NoMoves { in_check }
    } else {
        GameState::Playing { in_check }
    }
}

pub fn snapshot(game: &Game) -> GameSnapshot {
    GameSnapshot {
        board: game.position.to_flat(),
        side_to_move: game.side_to_move,
        last_move: game.last_move,
        history: game.history.clone(),
        white: game.white.state().clone(),
        black: game.black.state().clone(),
    }
}

/// Rebuild a game from a snapshot
///
/// # Errors
///
/// - [`ChessEngineError::InvalidBoardSize`] / [`ChessEngineError::InvalidPiece`]
///   for a malformed board
/// - [`ChessEngineError::InvalidColor`] if the side to move is not 1 or -1
pub fn restore_game(snapshot: &GameSnapshot, config: EngineConfig) -> ChessEngineResult<Game> {
    let position = Position::from_flat(&snapshot.board)?;
    let side_to_move = snapshot.side_to_move;
    if side_to_move != COLOR_WHITE && side_to_move != COLOR_BLACK {
        return Err(ChessEngineError::InvalidColor {
            color: side_to_move,
        });
    }

    let (white_config, black_config) = side_configs(&config);
    let mut white = MoveSelector::new(white_config);
    let mut black = MoveSelector::new(black_config);
    white.restore_state(snapshot.white.clone());
    black.restore_state(snapshot.black.clone());

    Ok(Game {
        position,
        side_to_move,
        last_move: snapshot.last_move,
        history: snapshot.history.clone(),
        config,
        white,
        black,
    })
}
