//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//!
//! ## Algorithm
//!
//! For every direction vector the walker advances exactly one unit step at a
//! time:
//! 1. Leave the board: stop
//! 2. Empty square: record it and keep going
//! 3. Occupied square (either color): record it and stop
//!
//! Step 3 does not look at who owns the blocker. Filtering out moves onto
//! friendly pieces is left to the caller.

use crate::board::*;
use crate::types::*;

/// Walk each direction from `(row, col)` and append the reachable squares
pub fn generate_sliding_moves(
    position: &Position,
    row: i8,
    col: i8,
    directions: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(dr, dc) in directions {
        let (mut to_row, mut to_col) = (row + dr, col + dc);

        while in_bounds(to_row, to_col) {
            moves.push((to_row, to_col));

            if !position.is_empty(to_row, to_col) {
                break;
            }

            to_row += dr;
            to_col += dc;
        }
    }
}
