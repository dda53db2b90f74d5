//! Bishop move generation
//!
//! Bishops slide diagonally until the board edge or the first occupied
//! square.

use super::sliding;
use crate::board::Position;
use crate::constants::BISHOP_DIRS;
use crate::types::*;

/// Generate bishop moves from a given square
pub fn generate_bishop_moves(position: &Position, row: i8, col: i8, moves: &mut Vec<Square>) {
    sliding::generate_sliding_moves(position, row, col, &BISHOP_DIRS, moves);
}
