//! Board representation and helper functions
//!
//! [`Position`] is the whole game state this engine needs: an 8x8 grid of
//! signed piece codes (see [`crate::constants`]). The external caller owns the
//! position and mutates it by applying moves; the engine only reads it, and
//! clones it whenever it wants to ask "what if this piece moved there".

use super::constants::*;
use super::error::{ChessEngineError, ChessEngineResult};
use super::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Check if square coordinates are on the board
#[inline]
pub fn in_bounds(row: i8, col: i8) -> bool {
    (0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&col)
}

/// Check if piece belongs to color (1 = white, -1 = black)
#[inline]
pub fn piece_belongs_to(piece: i8, color: Color) -> bool {
    piece != 0 && piece.signum() == color.signum()
}

/// Get color of piece (1 = white, -1 = black, 0 = empty)
#[inline]
pub fn get_piece_color(piece: i8) -> Color {
    piece.signum()
}

/// Centipawn value of a piece code, ignoring its sign
#[inline]
pub fn piece_value(piece: i8) -> i32 {
    FIGURE_VALUE
        .get(piece.unsigned_abs() as usize)
        .copied()
        .unwrap_or(VOID_VALUE)
}

/// Back rank of a color: row 0 for White, row 7 for Black
#[inline]
pub fn home_row(color: Color) -> i8 {
    if color > 0 {
        0
    } else {
        BOARD_SIZE - 1
    }
}

/// Row direction pawns of `color` advance in
#[inline]
pub fn forward(color: Color) -> i8 {
    if color > 0 {
        1
    } else {
        -1
    }
}

/// King-move distance between two squares
#[inline]
pub fn chebyshev_distance(a: Square, b: Square) -> i8 {
    (a.0 - b.0).abs().max((a.1 - b.1).abs())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    grid: [[i8; 8]; 8],
}

impl Default for Position {
    fn default() -> Self {
        Position::starting()
    }
}

impl Position {
    /// Standard starting arrangement
    pub fn starting() -> Self {
        Position { grid: SETUP }
    }

    pub fn empty() -> Self {
        Position { grid: [[0; 8]; 8] }
    }

    /// Build a position from 64 row-major squares (row 0 first).
    ///
    /// Used by collaborators that ship boards as flat arrays over the wire.
    pub fn from_flat(squares: &[i8]) -> ChessEngineResult<Self> {
        if squares.len() != 64 {
            return Err(ChessEngineError::InvalidBoardSize {
                len: squares.len(),
            });
        }

        let mut position = Position::empty();
        for (index, &value) in squares.iter().enumerate() {
            if value.unsigned_abs() > KING_ID as u8 {
                return Err(ChessEngineError::InvalidPiece { index, value });
            }
            position.grid[index / 8][index % 8] = value;
        }
        Ok(position)
    }

    /// Row-major flat copy, inverse of [`Position::from_flat`]
    pub fn to_flat(&self) -> Vec<i8> {
        self.grid.iter().flatten().copied().collect()
    }

    /// Piece at a square; off-board squares read as empty
    #[inline]
    pub fn get(&self, row: i8, col: i8) -> i8 {
        if in_bounds(row, col) {
            self.grid[row as usize][col as usize]
        } else {
            0
        }
    }

    /// Place a piece; writes outside the board are ignored
    #[inline]
    pub fn set(&mut self, row: i8, col: i8, piece: i8) {
        if in_bounds(row, col) {
            self.grid[row as usize][col as usize] = piece;
        }
    }

    #[inline]
    pub fn is_empty(&self, row: i8, col: i8) -> bool {
        self.get(row, col) == 0
    }

    pub fn grid(&self) -> &[[i8; 8]; 8] {
        &self.grid
    }

    /// Relocate the piece on the move's source square, overwriting whatever
    /// stands on the destination.
    ///
    /// No rules are checked and no special moves exist. Returns the piece that
    /// was on the destination (0 if it was empty).
    pub fn apply_move(&mut self, mv: &Move) -> i8 {
        if !in_bounds(mv.from_row, mv.from_col) || !in_bounds(mv.to_row, mv.to_col) {
            return 0;
        }
        let piece = self.get(mv.from_row, mv.from_col);
        let captured = self.get(mv.to_row, mv.to_col);
        self.set(mv.to_row, mv.to_col, piece);
        self.set(mv.from_row, mv.from_col, 0);
        captured
    }

    /// Copy of this position with `mv` applied
    pub fn after_move(&self, mv: &Move) -> Position {
        let mut scratch = self.clone();
        scratch.apply_move(mv);
        scratch
    }

    /// All occupied squares of a color with their piece codes
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, i8)> + '_ {
        self.squares()
            .filter(move |&(_, piece)| piece_belongs_to(piece, color))
    }

    /// All 64 squares in row-major order
    pub fn squares(&self) -> impl Iterator<Item = (Square, i8)> + '_ {
        self.grid.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &piece)| ((row as i8, col as i8), piece))
        })
    }

    pub fn count_pieces(&self, color: Color) -> usize {
        self.pieces(color).count()
    }

    /// Pieces of both sides except the kings
    pub fn count_non_king_pieces(&self) -> usize {
        self.squares()
            .filter(|&(_, piece)| piece != 0 && piece.abs() != KING_ID)
            .count()
    }

    /// Endgame once few non-king pieces remain
    pub fn is_endgame(&self, threshold: usize) -> bool {
        self.count_non_king_pieces() <= threshold
    }

    /// True if no pawn of `color` stands on column `col`
    pub fn file_has_no_pawn_of(&self, col: i8, color: Color) -> bool {
        (0..BOARD_SIZE).all(|row| self.get(row, col) != PAWN_ID * color)
    }

    /// True if no pawn of either color stands on column `col`
    pub fn file_is_open(&self, col: i8) -> bool {
        (0..BOARD_SIZE).all(|row| self.get(row, col).abs() != PAWN_ID)
    }
}

impl fmt::Display for Position {
    /// Text diagram, rank 8 at the top. White pieces upper case.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_SIZE).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..BOARD_SIZE {
                let piece = self.get(row, col);
                let symbol = match piece.abs() {
                    PAWN_ID => 'p',
                    ROOK_ID => 'r',
                    KNIGHT_ID => 'n',
                    BISHOP_ID => 'b',
                    QUEEN_ID => 'q',
                    KING_ID => 'k',
                    _ => '.',
                };
                let symbol = if piece > 0 {
                    symbol.to_ascii_uppercase()
                } else {
                    symbol
                };
                write!(f, "{symbol} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
