//! # Core Types - Moves, Squares and Scored Candidates
//!
//! ## Coordinates
//!
//! Squares are addressed as `(row, col)` pairs of signed bytes. Row 0 is
//! White's back rank and row 7 is Black's; column 0 is the a-file. Signed
//! coordinates let direction vectors be added without casts, and any pair
//! outside `0..8` is simply "off the board" (see [`crate::board::in_bounds`]).
//!
//! ## Move
//!
//! A [`Move`] is only a from/to pair. It carries no captured piece, no
//! promotion piece and no special-move flag: castling, en passant and
//! promotion are not part of this engine's rules.
//!
//! ## ScoredMove
//!
//! [`ScoredMove`] pairs a candidate with its heuristic score while the
//! selector ranks moves. It never leaves a selection call.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side to move: `1` for White, `-1` for Black (same sign as the pieces).
pub type Color = i8;
pub type Row = i8;
pub type Col = i8;
pub type Square = (Row, Col);
pub type FigureID = i8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from_row: Row,
    pub from_col: Col,
    pub to_row: Row,
    pub to_col: Col,
}

impl Move {
    pub const fn new(from_row: Row, from_col: Col, to_row: Row, to_col: Col) -> Self {
        Move {
            from_row,
            from_col,
            to_row,
            to_col,
        }
    }

    pub const fn from_squares(from: Square, to: Square) -> Self {
        Move::new(from.0, from.1, to.0, to.1)
    }

    #[inline]
    pub fn from(&self) -> Square {
        (self.from_row, self.from_col)
    }

    #[inline]
    pub fn to(&self) -> Square {
        (self.to_row, self.to_col)
    }
}

impl fmt::Display for Move {
    /// Coordinate notation, e.g. `e2e3` for `(1,4) -> (2,4)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            square_name(self.from()),
            square_name(self.to())
        )
    }
}

/// Algebraic name of a square (`(0,0)` is `a1`). Off-board squares print as `??`.
pub fn square_name(square: Square) -> String {
    let (row, col) = square;
    if !(0..8).contains(&row) || !(0..8).contains(&col) {
        return "??".to_string();
    }
    let file = (b'a' + col as u8) as char;
    let rank = (b'1' + row as u8) as char;
    format!("{file}{rank}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

impl ScoredMove {
    pub fn new(mv: Move, score: i32) -> Self {
        ScoredMove { mv, score }
    }
}
