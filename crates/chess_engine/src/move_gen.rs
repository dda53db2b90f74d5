//! Pseudo-legal move generation
//!
//! Produces destination squares for the piece standing on a square. Moves are
//! pseudo-legal: nothing here asks whether the mover's own king is left in
//! check, and there is no castling, en passant, double pawn step or promotion.
//!
//! ## Sliding quirk
//!
//! Rooks, bishops and queens stop at the first occupied square in each
//! direction and include it whoever owns it. Callers that must not land on
//! their own pieces (the move selector, move validation) filter those
//! destinations themselves; the threat analyzer relies on them to count
//! protected pieces.
//!
//! ## Module Organization
//!
//! - `pawn`, `knight`, `king` - step pieces
//! - `sliding`, `rook`, `bishop`, `queen` - ray pieces
//! - `attack` - threat analysis built on top of [`moves_from`]

mod attack;
mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;
mod sliding;


pub use attack::{
    checking_pieces, count_attackers, count_defenders, find_king, is_in_check,
    is_square_attacked, king_escape_squares,
};

use crate::board::*;
use crate::constants::*;
use crate::types::*;

/// Destination squares for the piece on `(row, col)`.
///
/// An empty or off-board source yields no moves. The pawn direction is taken
/// from the sign of the piece itself.
pub fn moves_from(position: &Position, row: i8, col: i8) -> Vec<Square> {
    let mut moves = Vec::with_capacity(28);

    if !in_bounds(row, col) {
        return moves;
    }

    let piece = position.get(row, col);
    let color = get_piece_color(piece);

    match piece.abs() {
        PAWN_ID => pawn::generate_pawn_moves(position, row, col, color, &mut moves),
        ROOK_ID => rook::generate_rook_moves(position, row, col, &mut moves),
        KNIGHT_ID => knight::generate_knight_moves(position, row, col, color, &mut moves),
        BISHOP_ID => bishop::generate_bishop_moves(position, row, col, &mut moves),
        QUEEN_ID => queen::generate_queen_moves(position, row, col, &mut moves),
        KING_ID => king::generate_king_moves(position, row, col, color, &mut moves),
        _ => {}
    }

    moves
}

/// Generate all pseudo-legal moves for a color
///
/// Includes the sliding pieces' moves onto their own side's pieces; see the
/// module docs.
pub fn generate_pseudo_legal_moves(position: &Position, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);

    for ((row, col), _) in position.pieces(color) {
        for (to_row, to_col) in moves_from(position, row, col) {
            moves.push(Move::new(row, col, to_row, to_col));
        }
    }

    moves
}

/// Pseudo-legal moves for a color that do not land on its own pieces
pub fn generate_candidate_moves(position: &Position, color: Color) -> Vec<Move> {
    let mut moves = generate_pseudo_legal_moves(position, color);
    moves.retain(|mv| !piece_belongs_to(position.get(mv.to_row, mv.to_col), color));
    moves
}
