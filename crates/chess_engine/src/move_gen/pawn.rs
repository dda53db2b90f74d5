//! Pawn move generation
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent (+row for White,
//!   -row for Black) onto an empty square
//! - **Captures**: one square diagonally forward onto an opposing piece
//!
//! There is no double step from the starting rank, no en passant and no
//! promotion. A pawn that reaches the last rank simply has no forward move.

use crate::board::*;
use crate::types::*;

/// Generate pawn moves from a given square
///
/// # Arguments
///
/// * `position` - The current position
/// * `row`, `col` - Square of the pawn
/// * `color` - Color of the pawn (1 for White, -1 for Black)
/// * `moves` - Output vector to append destinations to
pub fn generate_pawn_moves(
    position: &Position,
    row: i8,
    col: i8,
    color: Color,
    moves: &mut Vec<Square>,
) {
    let to_row = row + forward(color);

    if in_bounds(to_row, col) && position.is_empty(to_row, col) {
        moves.push((to_row, col));
    }

    for to_col in [col - 1, col + 1] {
        if !in_bounds(to_row, to_col) {
            continue;
        }
        let target = position.get(to_row, to_col);
        if target != 0 && !piece_belongs_to(target, color) {
            moves.push((to_row, to_col));
        }
    }
}
