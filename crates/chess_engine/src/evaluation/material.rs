//! Material evaluation
//!
//! Piece-value sums used by the capture terms and by callers that want a
//! quick "who is ahead" figure.

use crate::board::*;
use crate::types::*;

/// Material balance from White's point of view (White minus Black)
pub fn material_balance(position: &Position) -> i32 {
    position
        .squares()
        .filter(|&(_, piece)| piece != 0)
        .map(|(_, piece)| piece_value(piece) * i32::from(piece.signum()))
        .sum()
}

/// Value of whatever stands on the move's destination
pub fn capture_value(position: &Position, mv: &Move) -> i32 {
    piece_value(position.get(mv.to_row, mv.to_col))
}
