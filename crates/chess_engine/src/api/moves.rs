//! Move execution and validation
//!
//! Functions for executing moves and checking move legality. "Legal" here
//! means what the generator produces: the piece can reach the square and the
//! square does not hold one of its own pieces. Leaving one's own king in
//! check is allowed.

use super::game::Game;
use crate::board::*;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::move_gen::moves_from;
use crate::types::*;
use tracing::debug;

/// Check a move a player of `color` wants to make
///
/// # Errors
///
/// - [`ChessEngineError::InvalidSquare`] if either square is off the board
/// - [`ChessEngineError::NoPieceAtSquare`] if the source is empty
/// - [`ChessEngineError::WrongPieceColor`] if the source piece is the opponent's
/// - [`ChessEngineError::InvalidMove`] if the piece cannot go there
pub fn validate_move(position: &Position, mv: &Move, color: Color) -> ChessEngineResult<()> {
    for (row, col) in [mv.from(), mv.to()] {
        if !in_bounds(row, col) {
            return Err(ChessEngineError::InvalidSquare { row, col });
        }
    }

    let piece = position.get(mv.from_row, mv.from_col);
    if piece == 0 {
        return Err(ChessEngineError::NoPieceAtSquare {
            row: mv.from_row,
            col: mv.from_col,
        });
    }
    if !piece_belongs_to(piece, color) {
        return Err(ChessEngineError::WrongPieceColor {
            row: mv.from_row,
            col: mv.from_col,
            color,
        });
    }

    let reachable = moves_from(position, mv.from_row, mv.from_col).contains(&mv.to());
    let own_target = piece_belongs_to(position.get(mv.to_row, mv.to_col), color);
    if !reachable || own_target {
        return Err(ChessEngineError::InvalidMove {
            from_row: mv.from_row,
            from_col: mv.from_col,
            to_row: mv.to_row,
            to_col: mv.to_col,
        });
    }

    Ok(())
}

/// Check if a move is legal for `color`
///
/// # Examples
///
/// ```rust,ignore
/// // e2-e3 is fine for White from the start
/// assert!(is_legal_move(&Position::starting(), &Move::new(1, 4, 2, 4), COLOR_WHITE));
/// ```
pub fn is_legal_move(position: &Position, mv: &Move, color: Color) -> bool {
    validate_move(position, mv, color).is_ok()
}

/// Play a move for the side to move
///
/// Validates the move, applies it, records it and hands the turn over. The
/// opponent's selector is told about the move so it can answer from the book.
///
/// # Returns
///
/// The captured piece code, `0` if the destination was empty.
///
/// # Errors
///
/// Any error of [`validate_move`]; the game is left untouched.
pub fn do_move(game: &mut Game, mv: Move) -> ChessEngineResult<i8> {
    let color = game.side_to_move;
    validate_move(&game.position, &mv, color)?;

    let captured = game.position.apply_move(&mv);
    game.last_move = Some(mv);
    game.history.push(mv);
    game.selector_mut(-color).record_opponent_move(mv);
    game.side_to_move = -color;

    debug!(
        "[ENGINE] ply {}: {}{}",
        game.history.len(),
        mv,
        if captured != 0 { " (capture)" } else { "" }
    );
    Ok(captured)
}
