//! Attack detection and square checking
//!
//! Threat analysis built entirely on [`moves_from`]: a piece "reaches" a
//! square when the square appears in its generated destinations.
//!
//! ## The cheaper-attacker rule
//!
//! [`is_square_attacked`] answers "is this square unsafe to occupy" rather
//! than "can anything capture here". On an empty square any attacker counts.
//! On an occupied square only attackers worth no more than the occupant
//! count, so a queen bearing down on a defended pawn does not make the pawn's
//! square "attacked". Check detection inherits this rule: a king (value
//! 10,000) is attacked by anything that reaches it.
//!
//! ## Counting attackers and defenders
//!
//! The counters ask a slightly different question: how many pieces could
//! move onto (or recapture on) the square. The occupant is swapped for a
//! probe piece of the opposite color before generating, so pawns are counted
//! by their diagonals, and knights and kings count even when the square
//! holds a piece of their own side.

use super::moves_from;
use crate::board::*;
use crate::constants::*;
use crate::types::*;

/// Pieces of `by_color` whose generated moves include `(row, col)`, with their values
fn attackers_of(position: &Position, row: i8, col: i8, by_color: Color) -> Vec<(Square, i32)> {
    position
        .pieces(by_color)
        .filter(|&(square, _)| square != (row, col))
        .filter(|&((from_row, from_col), _)| {
            moves_from(position, from_row, from_col).contains(&(row, col))
        })
        .map(|(square, piece)| (square, piece_value(piece)))
        .collect()
}

/// Check if a square is under attack by pieces of the specified color
///
/// # Arguments
///
/// * `position` - The current position
/// * `row`, `col` - Target square
/// * `by_color` - Color of pieces that might attack (1 for White, -1 for Black)
///
/// # Returns
///
/// For an empty square, `true` if any piece of `by_color` reaches it. For an
/// occupied square, `true` only if at least one attacker is worth no more
/// than the occupant. Off-board squares are never attacked.
pub fn is_square_attacked(position: &Position, row: i8, col: i8, by_color: Color) -> bool {
    if !in_bounds(row, col) {
        return false;
    }

    let attackers = attackers_of(position, row, col, by_color);
    let occupant = position.get(row, col);

    if occupant == 0 {
        return !attackers.is_empty();
    }

    let occupant_value = piece_value(occupant);
    attackers.iter().any(|&(_, value)| value <= occupant_value)
}

/// Number of `color` pieces that could move onto `(row, col)`, occupant excluded
fn count_reaching(position: &Position, row: i8, col: i8, color: Color) -> usize {
    if !in_bounds(row, col) {
        return 0;
    }

    let mut probe = position.clone();
    probe.set(row, col, PAWN_ID * -color);

    attackers_of(&probe, row, col, color).len()
}

/// Count pieces of `by_color` that could capture on `(row, col)`
pub fn count_attackers(position: &Position, row: i8, col: i8, by_color: Color) -> usize {
    count_reaching(position, row, col, by_color)
}

/// Count pieces of `color` that protect `(row, col)`, i.e. could recapture there
pub fn count_defenders(position: &Position, row: i8, col: i8, color: Color) -> usize {
    count_reaching(position, row, col, color)
}

/// Find the king position for a given color
///
/// Returns the first king found scanning row by row; positions with more than
/// one king of a color are the caller's problem.
pub fn find_king(position: &Position, color: Color) -> Option<Square> {
    position
        .pieces(color)
        .find(|&(_, piece)| piece.abs() == KING_ID)
        .map(|(square, _)| square)
}

/// Check if the king of a given color is in check
///
/// `false` when the color has no king on the board.
pub fn is_in_check(position: &Position, color: Color) -> bool {
    match find_king(position, color) {
        Some((row, col)) => is_square_attacked(position, row, col, -color),
        None => false,
    }
}

/// Squares of the opposing pieces that reach the king of `color`
///
/// Every piece that reaches the king is listed, whatever its value.
pub fn checking_pieces(position: &Position, color: Color) -> Vec<Square> {
    match find_king(position, color) {
        Some((row, col)) => attackers_of(position, row, col, -color)
            .into_iter()
            .map(|(square, _)| square)
            .collect(),
        None => Vec::new(),
    }
}

/// Squares next to the king it could step to without being attacked there
///
/// A square qualifies when it is empty or holds an opposing piece and the
/// opponent does not attack it (occupied-square rule applies to captures).
/// An empty or off-board king square yields nothing.
pub fn king_escape_squares(position: &Position, king_row: i8, king_col: i8) -> Vec<Square> {
    let king = position.get(king_row, king_col);
    if king == 0 {
        return Vec::new();
    }
    let color = get_piece_color(king);

    KING_STEPS
        .iter()
        .map(|&(dr, dc)| (king_row + dr, king_col + dc))
        .filter(|&(row, col)| in_bounds(row, col))
        .filter(|&(row, col)| !piece_belongs_to(position.get(row, col), color))
        .filter(|&(row, col)| !is_square_attacked(position, row, col, -color))
        .collect()
}
