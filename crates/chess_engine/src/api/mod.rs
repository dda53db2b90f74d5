//! Public API for the chess engine
//!
//! Provides high-level functions for game management and AI move generation.
//! Caller-facing operations validate their input and return
//! [`ChessEngineResult`](crate::error::ChessEngineResult).
//!
//! ## Module Organization
//!
//! - `game` - Game context and lifecycle (new_game, reset_game)
//! - `moves` - Move execution and validation (do_move, validate_move, is_legal_move)
//! - `state` - Game state queries, AI replies and snapshots

mod game;
mod moves;
mod state;


pub use game::{new_game, reset_game, Game};
pub use moves::{do_move, is_legal_move, validate_move};
pub use state::{get_game_state, reply, restore_game, snapshot, GameSnapshot, GameState};
