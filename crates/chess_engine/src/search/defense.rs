//! Defensive and check-response terms
//!
//! The second side plays a compact, king-hugging game: it gets small bonuses
//! for keeping pieces near its king and in the centre. Any side in check gets
//! the check-response terms. Those protect the mover's own king (the check
//! must actually be resolved, preferably by a cheap piece rather than the
//! king) and reward constraining the opponent's king at the same time.

use crate::board::*;
use crate::constants::*;
use crate::evaluation::{Candidate, ScoringContext};
use crate::move_gen::{checking_pieces, find_king, is_in_check, king_escape_squares, moves_from};
use crate::types::*;

/// Bonuses applied only when the second side is to move
pub(crate) fn defensive_score(ctx: &ScoringContext<'_>, candidate: &Candidate) -> i32 {
    let (to_row, to_col) = candidate.mv.to();
    let mut score = 0;

    if candidate.kind() == KING_ID {
        if candidate.is_castle_shaped(ctx.color) {
            score += DEFENSIVE_CASTLE_BONUS;
        }
    } else if let Some(king) = find_king(&candidate.after, ctx.color) {
        if chebyshev_distance((to_row, to_col), king) <= 2 {
            score += DEFENSIVE_PROXIMITY_BONUS;
        }
    }

    if (3..=4).contains(&to_row) && (3..=4).contains(&to_col) {
        score += CENTER_CLUSTER_BONUS;
    }

    let next_to_major = KING_STEPS.iter().any(|&(dr, dc)| {
        let piece = candidate.after.get(to_row + dr, to_col + dc);
        piece_belongs_to(piece, ctx.color)
            && matches!(piece.abs(), QUEEN_ID | ROOK_ID | BISHOP_ID)
    });
    if next_to_major {
        score += MAJOR_SUPPORT_BONUS;
    }

    score
}

/// Terms for a side whose king is in check before the move
pub(crate) fn check_response_score(ctx: &ScoringContext<'_>, candidate: &Candidate) -> i32 {
    let mut score = 0;

    if is_in_check(&candidate.after, ctx.color) {
        score -= CHECK_UNRESOLVED_PENALTY;
    } else {
        score += CHECK_RESOLVED_BONUS;

        if candidate.kind() != KING_ID {
            let mover = candidate.mover_value();
            score += (QUEEN_VALUE - mover).max(0) / 4;
            let cheapest = cheapest_responder(ctx.position, ctx.color);
            if cheapest.is_some_and(|cheapest| mover <= cheapest) {
                score += CHEAP_RESPONDER_BONUS;
            }
        }
    }

    if candidate.kind() == KING_ID {
        score -= KING_RESPONSE_PENALTY;
    }

    if let Some((king_row, king_col)) = find_king(ctx.position, -ctx.color) {
        let before = king_escape_squares(ctx.position, king_row, king_col).len() as i32;
        let after = king_escape_squares(&candidate.after, king_row, king_col).len() as i32;
        score += (before - after).max(0) * ESCAPE_SQUARE_SQUEEZE_BONUS;
    }

    score
}

/// Value of the cheapest non-king piece of `color` that reaches a checker
fn cheapest_responder(position: &Position, color: Color) -> Option<i32> {
    let checkers = checking_pieces(position, color);

    position
        .pieces(color)
        .filter(|&(_, piece)| piece.abs() != KING_ID)
        .filter(|&((row, col), _)| {
            let reach = moves_from(position, row, col);
            checkers.iter().any(|checker| reach.contains(checker))
        })
        .map(|(_, piece)| piece_value(piece))
        .min()
}
