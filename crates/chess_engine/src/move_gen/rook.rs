//! Rook move generation
//!
//! Rooks slide horizontally and vertically until the board edge or the first
//! occupied square.

use super::sliding;
use crate::board::Position;
use crate::constants::ROOK_DIRS;
use crate::types::*;

/// Generate rook moves from a given square
pub fn generate_rook_moves(position: &Position, row: i8, col: i8, moves: &mut Vec<Square>) {
    sliding::generate_sliding_moves(position, row, col, &ROOK_DIRS, moves);
}
