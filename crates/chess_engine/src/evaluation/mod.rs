//! Per-move evaluation
//!
//! The selector never evaluates a position as a whole; it scores each
//! candidate move by looking at the board before and after it. This module
//! holds the shared per-call and per-move facts plus the positional terms.
//!
//! ## Module Organization
//!
//! - `pst` - Centre-weighted square table
//! - `material` - Piece-value sums and capture values
//! - `position` - Positional contribution of a move (table + piece add-ons)

mod material;
mod position;
mod pst;

pub use material::{capture_value, material_balance};
pub use position::positional_score;
pub use pst::square_weight;

use crate::board::*;
use crate::config::EngineConfig;
use crate::move_gen::is_square_attacked;
use crate::types::*;

/// Facts shared by every candidate of one selection call
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    pub position: &'a Position,
    pub color: Color,
    /// Selector call count including the current call
    pub move_count: u32,
    pub config: &'a EngineConfig,
    pub endgame: bool,
}

impl<'a> ScoringContext<'a> {
    pub fn new(
        position: &'a Position,
        color: Color,
        move_count: u32,
        config: &'a EngineConfig,
    ) -> Self {
        ScoringContext {
            position,
            color,
            move_count,
            config,
            endgame: position.is_endgame(config.endgame_piece_threshold),
        }
    }

    pub fn is_early_game(&self) -> bool {
        self.move_count <= self.config.early_game_limit && !self.endgame
    }
}

/// One candidate move with the scratch position it leads to
#[derive(Debug, Clone)]
pub struct Candidate {
    pub mv: Move,
    pub piece: i8,
    pub captured: i8,
    pub after: Position,
    /// The mover stands on an attacked square before moving
    pub threatened: bool,
    /// The mover is not attacked on its destination after moving
    pub safe_after: bool,
}

impl Candidate {
    pub fn new(ctx: &ScoringContext<'_>, mv: Move) -> Self {
        let piece = ctx.position.get(mv.from_row, mv.from_col);
        let captured = ctx.position.get(mv.to_row, mv.to_col);
        let after = ctx.position.after_move(&mv);

        let threatened = is_square_attacked(ctx.position, mv.from_row, mv.from_col, -ctx.color);
        let safe_after = !is_square_attacked(&after, mv.to_row, mv.to_col, -ctx.color);

        Candidate {
            mv,
            piece,
            captured,
            after,
            threatened,
            safe_after,
        }
    }

    pub fn mover_value(&self) -> i32 {
        piece_value(self.piece)
    }

    pub fn captured_value(&self) -> i32 {
        piece_value(self.captured)
    }

    pub fn kind(&self) -> i8 {
        self.piece.abs()
    }

    /// Moving an attacked piece to a square where it is not attacked
    pub fn escapes(&self) -> bool {
        self.threatened && self.safe_after
    }

    /// Same-rank king move of two files on its own back rank
    pub fn is_castle_shaped(&self, color: Color) -> bool {
        let mv = &self.mv;
        mv.from_row == home_row(color)
            && mv.to_row == mv.from_row
            && (mv.to_col - mv.from_col).abs() == 2
    }
}
