//! Error types for chess engine
//!
//! The engine's own generation, threat and selection code never fails: bad
//! coordinates are dropped and "no move" is an `Option`. These errors are for
//! the caller-facing edges, i.e. validating a move a player tried to make and
//! rebuilding a position or snapshot handed over by a collaborator.

use thiserror::Error;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Invalid move attempted
    #[error("Invalid move: from ({from_row}, {from_col}) to ({to_row}, {to_col})")]
    InvalidMove {
        from_row: i8,
        from_col: i8,
        to_row: i8,
        to_col: i8,
    },

    /// Coordinates outside the 8x8 board
    #[error("Invalid square: ({row}, {col}) (both must be 0-7)")]
    InvalidSquare { row: i8, col: i8 },

    /// No piece at source square
    #[error("No piece at source square ({row}, {col})")]
    NoPieceAtSquare { row: i8, col: i8 },

    /// Piece does not belong to the specified color
    #[error("Piece at ({row}, {col}) does not belong to color {color}")]
    WrongPieceColor { row: i8, col: i8, color: i8 },

    /// Flat board data with the wrong number of squares
    #[error("Invalid board size: expected 64 squares, got {len}")]
    InvalidBoardSize { len: usize },

    /// Square value outside -6..=6
    #[error("Invalid piece value {value} at index {index}")]
    InvalidPiece { index: usize, value: i8 },

    /// Side value other than 1 or -1
    #[error("Invalid color {color} (must be 1 or -1)")]
    InvalidColor { color: i8 },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
