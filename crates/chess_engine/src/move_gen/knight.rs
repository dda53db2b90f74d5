//! Knight move generation
//!
//! ## Knight Movement Rules
//!
//! - Knights jump in an L-shape and ignore pieces in between
//! - 8 possible destinations from most squares (fewer near edges)
//! - Cannot move to squares occupied by own pieces
//! - Can capture opponent pieces on destination squares

use crate::board::*;
use crate::constants::KNIGHT_JUMPS;
use crate::types::*;

/// Generate knight moves from a given square
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_knight_moves(&position, 7, 1, COLOR_BLACK, &mut moves);
/// // On an otherwise empty board: [(6, 3), (5, 2), (5, 0)]
/// ```
pub fn generate_knight_moves(
    position: &Position,
    row: i8,
    col: i8,
    color: Color,
    moves: &mut Vec<Square>,
) {
    for (dr, dc) in KNIGHT_JUMPS {
        let (to_row, to_col) = (row + dr, col + dc);
        if !in_bounds(to_row, to_col) {
            continue;
        }

        // Valid if destination is empty or contains opponent piece
        let target = position.get(to_row, to_col);
        if target == 0 || !piece_belongs_to(target, color) {
            moves.push((to_row, to_col));
        }
    }
}
