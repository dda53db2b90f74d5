//! Heuristic chess core
//!
//! Pseudo-legal move generation, threat analysis, a small opening book and a
//! single-ply move selector over an 8x8 signed-byte board.
//!
//! ```rust,ignore
//! use chess_engine::{EngineConfig, MoveSelector, Position, COLOR_WHITE};
//!
//! let position = Position::starting();
//! let mut selector = MoveSelector::new(EngineConfig::seeded(7));
//! let mv = selector.select_move(&position, COLOR_WHITE);
//! ```

pub mod api;
pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod move_gen;
pub mod opening_book;
pub mod search;
pub mod types;

pub use api::{Game, GameSnapshot, GameState};
pub use board::Position;
pub use config::EngineConfig;
pub use constants::{COLOR_BLACK, COLOR_WHITE, FIRST_SIDE};
pub use error::{ChessEngineError, ChessEngineResult};
pub use move_gen::{is_in_check, moves_from};
pub use opening_book::OpeningBook;
pub use search::{MoveSelector, SelectorState};
pub use types::{Move, ScoredMove, Square};
