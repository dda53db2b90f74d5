//! King move generation
//!
//! ## King Movement Rules
//!
//! - Kings move one square in any direction (8 possible destinations)
//! - Cannot move to squares occupied by own pieces
//! - Squares attacked by the opponent are NOT excluded here; the move
//!   selector's threat checks take care of that
//! - No castling

use crate::board::*;
use crate::constants::KING_STEPS;
use crate::types::*;

/// Generate king moves from a given square
///
/// Ownership of the destination is decided by comparing the signs of the two
/// pieces, so a king can never "capture" a piece of its own side.
pub fn generate_king_moves(
    position: &Position,
    row: i8,
    col: i8,
    color: Color,
    moves: &mut Vec<Square>,
) {
    for (dr, dc) in KING_STEPS {
        let (to_row, to_col) = (row + dr, col + dc);
        if !in_bounds(to_row, to_col) {
            continue;
        }

        if !piece_belongs_to(position.get(to_row, to_col), color) {
            moves.push((to_row, to_col));
        }
    }
}
