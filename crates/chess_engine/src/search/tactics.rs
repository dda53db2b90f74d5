//! Base (tactical) score of a candidate
//!
//! Capture differential, hanging-piece penalty, escape bonus, pressure on
//! the enemy king and idle rook suppression.

use crate::board::*;
use crate::constants::*;
use crate::evaluation::{Candidate, ScoringContext};
use crate::move_gen::{count_defenders, find_king};

/// Tactical score of a candidate, or [`REJECTED_SCORE`] for an unsupported
/// move next to the enemy king
pub(crate) fn base_score(ctx: &ScoringContext<'_>, candidate: &Candidate) -> i32 {
    let mover = candidate.mover_value();
    let captured = candidate.captured_value();
    let mut score = 0;

    if candidate.captured != 0 {
        score += captured;
        if captured >= mover {
            score += EQUAL_CAPTURE_BONUS;
        }
    }

    if !candidate.safe_after && captured < mover {
        score -= mover;
    }

    if candidate.escapes() {
        score += ESCAPE_BONUS;
    }

    if let Some(enemy_king) = find_king(&candidate.after, -ctx.color) {
        if chebyshev_distance(candidate.mv.to(), enemy_king) == 1 {
            let (to_row, to_col) = candidate.mv.to();
            if count_defenders(&candidate.after, to_row, to_col, ctx.color) == 0 {
                return REJECTED_SCORE;
            }
            score += KING_PRESSURE_BONUS;
        }
    }

    if candidate.kind() == ROOK_ID && !rook_move_has_purpose(ctx, candidate) {
        score = score.min(0) - IDLE_ROOK_PENALTY;
    }

    score
}

/// Capture, escape, half-open file or supported development from home
pub(crate) fn rook_move_has_purpose(ctx: &ScoringContext<'_>, candidate: &Candidate) -> bool {
    let (to_row, to_col) = candidate.mv.to();
    let home = home_row(ctx.color);

    if candidate.captured != 0 || candidate.escapes() {
        return true;
    }
    if ctx.position.file_has_no_pawn_of(to_col, ctx.color) {
        return true;
    }
    candidate.mv.from_row == home
        && to_row != home
        && count_defenders(&candidate.after, to_row, to_col, ctx.color) > 0
}
