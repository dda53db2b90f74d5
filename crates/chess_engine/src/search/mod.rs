//! Single-ply heuristic move selection
//!
//! There is no tree search here. Every candidate move of the side to move is
//! tried once on a scratch copy of the board and scored by adding up four
//! groups of terms:
//!
//! 1. tactics: captures, hanging pieces, escapes, king pressure, idle rooks
//! 2. position: square table plus knight, rook and king add-ons
//! 3. defence: second side only
//! 4. check response: only when the mover's king is in check
//!
//! Moves that score above zero compete; if none does, the positional term
//! alone ranks whatever was not rejected. Ties are broken at random.
//!
//! ## Module Organization
//!
//! - `selector` - [`MoveSelector`] state machine (book phase, heuristic phase)
//! - `tactics` - Base (tactical) score
//! - `defense` - Second-side and check-response terms

mod defense;
mod selector;
mod tactics;


pub use selector::{MoveSelector, SelectorState};
