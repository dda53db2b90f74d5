//! Positional contribution of a move
//!
//! Table weight of the destination for every piece but the king, plus small
//! piece-specific add-ons for knights, rooks and the king. This is also the
//! whole score when the selector falls back to quiet development.

use super::pst::square_weight;
use super::{Candidate, ScoringContext};
use crate::board::*;
use crate::constants::*;

/// Positional score of a candidate; see the module docs
pub fn positional_score(ctx: &ScoringContext<'_>, candidate: &Candidate) -> i32 {
    let (to_row, to_col) = candidate.mv.to();
    let mut score = 0;

    if candidate.kind() != KING_ID {
        score += square_weight(to_row, to_col);
    }

    score += match candidate.kind() {
        KNIGHT_ID => knight_terms(ctx, candidate),
        ROOK_ID => rook_terms(ctx, candidate),
        KING_ID => king_terms(ctx, candidate),
        _ => 0,
    };

    score
}

fn knight_terms(ctx: &ScoringContext<'_>, candidate: &Candidate) -> i32 {
    let mv = &candidate.mv;
    let mut score = 0;

    if (2..=5).contains(&mv.to_row) && (2..=5).contains(&mv.to_col) {
        score += KNIGHT_CENTER_BONUS;
    }
    let home = home_row(ctx.color);
    if mv.from_row == home && mv.to_row != home {
        score += KNIGHT_DEVELOPMENT_BONUS;
    }
    if candidate.escapes() {
        score += KNIGHT_ESCAPE_BONUS;
    }

    score
}

fn rook_terms(ctx: &ScoringContext<'_>, candidate: &Candidate) -> i32 {
    let mv = &candidate.mv;
    let home = home_row(ctx.color);

    let leaves_back_rank = mv.from_row == home && mv.to_row != home;
    if leaves_back_rank && !ctx.position.file_is_open(mv.to_col) && !candidate.threatened {
        return -ROOK_LEAVE_PENALTY;
    }
    0
}

fn king_terms(ctx: &ScoringContext<'_>, candidate: &Candidate) -> i32 {
    let (to_row, to_col) = candidate.mv.to();
    let home = home_row(ctx.color);
    let castle_shaped = candidate.is_castle_shaped(ctx.color);
    let last = BOARD_SIZE - 1;
    let mut score = 0;

    if to_row == home && (to_col == 0 || to_col == last) {
        score -= KING_CORNER_PENALTY;
    }
    if castle_shaped {
        score += CASTLE_SHAPE_BONUS;
    }

    if ctx.is_early_game() {
        if !castle_shaped {
            score -= EARLY_KING_PENALTY;
        }
        let near_edge = to_col <= 1 || to_col >= last - 1;
        if near_edge {
            score += KING_EDGE_BONUS;
            if to_row == home {
                score += KING_CORNER_EDGE_BONUS;
            }
        }
    }

    let shelter = KING_STEPS
        .iter()
        .filter(|&&(dr, dc)| {
            piece_belongs_to(candidate.after.get(to_row + dr, to_col + dc), ctx.color)
        })
        .count() as i32;
    score += shelter * KING_SHELTER_BONUS;

    if ctx.endgame && (to_row == 0 || to_row == last || to_col == 0 || to_col == last) {
        score += ENDGAME_KING_EDGE_BONUS;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::types::Move;

    fn score(position: &Position, color: i8, mv: Move, move_count: u32) -> i32 {
        let config = EngineConfig::default();
        let ctx = ScoringContext::new(position, color, move_count, &config);
        let candidate = Candidate::new(&ctx, mv);
        positional_score(&ctx, &candidate)
    }

    #[test]
    fn test_pawn_scores_destination_weight() {
        let position = Position::starting();
        assert_eq!(score(&position, COLOR_WHITE, Move::new(1, 4, 2, 4), 11), 30);
        assert_eq!(score(&position, COLOR_WHITE, Move::new(1, 0, 2, 0), 11), 10);
    }

    #[test]
    fn test_knight_development_into_centre() {
        let position = Position::starting();
        // Nf3: table 25 + centre 20 + development 15
        assert_eq!(score(&position, COLOR_WHITE, Move::new(0, 6, 2, 5), 11), 60);
        // Na3: table 10 + development 15
        assert_eq!(score(&position, COLOR_WHITE, Move::new(0, 1, 2, 0), 11), 25);
    }

    #[test]
    fn test_rook_leaving_home_on_closed_file() {
        let mut position = Position::empty();
        position.set(0, 0, W_ROOK);
        position.set(4, 0, B_PAWN);
        // a-file holds a pawn: table weight of a3 (10) minus the penalty
        assert_eq!(
            score(&position, COLOR_WHITE, Move::new(0, 0, 2, 0), 11),
            10 - ROOK_LEAVE_PENALTY
        );

        position.set(4, 0, 0);
        assert_eq!(score(&position, COLOR_WHITE, Move::new(0, 0, 2, 0), 11), 10);
    }

    #[test]
    fn test_early_king_step_is_penalised() {
        let mut position = Position::empty();
        position.set(0, 4, W_KING);
        for col in 0..8 {
            position.set(1, col, W_PAWN);
        }
        for col in 0..8 {
            position.set(6, col, B_PAWN);
        }
        // Ke1-f1: pawns on e2 f2 g2 shelter the king on f1
        let early = score(&position, COLOR_WHITE, Move::new(0, 4, 0, 5), 3);
        let late = score(&position, COLOR_WHITE, Move::new(0, 4, 0, 5), 30);
        assert_eq!(late - early, EARLY_KING_PENALTY);
        assert_eq!(late, 3 * KING_SHELTER_BONUS);
    }

    #[test]
    fn test_castle_shaped_king_move() {
        let mut position = Position::empty();
        position.set(0, 4, W_KING);
        position.set(7, 4, B_KING);
        for col in 0..6 {
            position.set(1, col + 2, W_PAWN);
            position.set(6, col, B_PAWN);
        }
        // Generation never yields Ke1-g1; the term is scored on a built move
        let castle = score(&position, COLOR_WHITE, Move::new(0, 4, 0, 6), 30);
        assert_eq!(castle, CASTLE_SHAPE_BONUS + 3 * KING_SHELTER_BONUS);
    }

    #[test]
    fn test_king_corner_penalty() {
        let mut position = Position::empty();
        position.set(0, 1, W_KING);
        position.set(7, 7, B_KING);
        for col in 0..6 {
            position.set(3, col, W_PAWN);
            position.set(4, col, B_PAWN);
        }
        let corner = score(&position, COLOR_WHITE, Move::new(0, 1, 0, 0), 30);
        assert_eq!(corner, -KING_CORNER_PENALTY);
    }

    #[test]
    fn test_endgame_king_prefers_edges() {
        let mut position = Position::empty();
        position.set(1, 1, W_KING);
        position.set(7, 7, B_KING);

        let edge = score(&position, COLOR_WHITE, Move::new(1, 1, 1, 0), 30);
        let inside = score(&position, COLOR_WHITE, Move::new(1, 1, 2, 2), 30);
        assert_eq!(edge, ENDGAME_KING_EDGE_BONUS);
        assert_eq!(inside, 0);
    }
}
