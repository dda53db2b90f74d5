//! Queen move generation
//!
//! Queens combine the movement patterns of bishops and rooks.

use super::bishop;
use super::rook;
use crate::board::Position;
use crate::types::*;

/// Generate queen moves from a given square
///
/// Generates the rook rays followed by the bishop rays.
pub fn generate_queen_moves(position: &Position, row: i8, col: i8, moves: &mut Vec<Square>) {
    rook::generate_rook_moves(position, row, col, moves);
    bishop::generate_bishop_moves(position, row, col, moves);
}
