//! Move selector state machine
//!
//! Each side of a game owns one [`MoveSelector`]. Its call counter drives two
//! phases: early calls may be answered from the opening book, everything else
//! (and every book miss) goes through the single-ply heuristic.

use super::defense::{check_response_score, defensive_score};
use super::tactics::{base_score, rook_move_has_purpose};
use crate::board::Position;
use crate::config::EngineConfig;
use crate::constants::*;
use crate::evaluation::{positional_score, Candidate, ScoringContext};
use crate::move_gen::{generate_candidate_moves, is_in_check};
use crate::opening_book::{BookProbe, OpeningBook};
use crate::types::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// The part of a selector that survives a save/restore
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorState {
    /// Number of `select_move` calls made so far
    pub move_count: u32,
    /// Opening being played (first side) or answered (second side)
    pub opening: Option<String>,
    /// Next entry of the book line to try
    pub book_cursor: usize,
    /// Most recent move the opponent made, if the caller reported it
    pub opponent_last_move: Option<Move>,
}

pub struct MoveSelector<R: Rng = StdRng> {
    config: EngineConfig,
    book: OpeningBook,
    state: SelectorState,
    rng: R,
}

impl MoveSelector<StdRng> {
    /// Selector seeded from `config.seed`, or from the OS when unset
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        MoveSelector::with_rng(config, rng)
    }

    pub fn seeded(seed: u64) -> Self {
        MoveSelector::new(EngineConfig::seeded(seed))
    }
}

impl<R: Rng> MoveSelector<R> {
    pub fn with_rng(config: EngineConfig, rng: R) -> Self {
        MoveSelector {
            config,
            book: OpeningBook::standard(),
            state: SelectorState::default(),
            rng,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> &SelectorState {
        &self.state
    }

    /// Replace the saved part of the selector, e.g. after loading a game
    pub fn restore_state(&mut self, state: SelectorState) {
        self.state = state;
    }

    /// Forget the current game
    pub fn reset(&mut self) {
        self.state = SelectorState::default();
    }

    /// Tell the selector what the opponent just played
    pub fn record_opponent_move(&mut self, mv: Move) {
        self.state.opponent_last_move = Some(mv);
    }

    /// Choose a move for `color`, or `None` when it has nothing to move
    ///
    /// The position is only read; speculative moves are tried on copies.
    pub fn select_move(&mut self, position: &Position, color: Color) -> Option<Move> {
        self.state.move_count += 1;

        if self.state.move_count <= self.config.opening_ply_limit {
            if let Some(mv) = self.book_move(position, color) {
                debug!(
                    "[BOOK] {} plays {} ({})",
                    side_name(color),
                    mv,
                    self.state.opening.as_deref().unwrap_or("?")
                );
                return Some(mv);
            }
        }

        self.heuristic_move(position, color)
    }

    /// Next book move for this call, if the book has one that still fits
    ///
    /// A scripted entry is consumed whether or not it matched.
    fn book_move(&mut self, position: &Position, color: Color) -> Option<Move> {
        if self.state.opening.is_none() {
            if color == FIRST_SIDE {
                if self.state.move_count == 1 {
                    let line = self.book.choose_line(&mut self.rng)?;
                    self.state.opening = Some(line.name.to_string());
                }
            } else {
                self.state.opening = self
                    .book
                    .identify_opening(self.state.opponent_last_move.as_ref(), position)
                    .map(str::to_string);
            }
        }

        let name = self.state.opening.as_deref()?;
        let line = if color == FIRST_SIDE {
            self.book.line(name)
        } else {
            self.book.response_to(name)
        }?;

        let cursor = self.state.book_cursor;
        match OpeningBook::probe(line, cursor, position) {
            BookProbe::Hit(mv) => {
                self.state.book_cursor += 1;
                Some(mv)
            }
            BookProbe::Mismatch => {
                self.state.book_cursor += 1;
                debug!("[BOOK] {} entry {} no longer fits", line.name, cursor);
                None
            }
            BookProbe::Exhausted => None,
        }
    }

    fn heuristic_move(&mut self, position: &Position, color: Color) -> Option<Move> {
        let moves = generate_candidate_moves(position, color);
        if moves.is_empty() {
            debug!("[ENGINE] {} has no candidate moves", side_name(color));
            return None;
        }

        let ctx = ScoringContext::new(position, color, self.state.move_count, &self.config);
        let in_check = is_in_check(position, color);

        let scored: Vec<(ScoredMove, i32)> = moves
            .into_iter()
            .map(|mv| {
                let candidate = Candidate::new(&ctx, mv);
                let positional = positional_score(&ctx, &candidate);
                let total = total_score(&ctx, &candidate, positional, in_check);
                trace!("[ENGINE] {} scores {} (positional {})", mv, total, positional);
                (ScoredMove::new(mv, total), positional)
            })
            .collect();

        let mut pool: Vec<ScoredMove> = scored
            .iter()
            .filter(|(scored, _)| scored.score > 0)
            .map(|(scored, _)| *scored)
            .collect();

        if pool.is_empty() {
            debug!("[ENGINE] no move scores positive, ranking by development");
            pool = scored
                .iter()
                .filter(|(scored, _)| scored.score != REJECTED_SCORE)
                .map(|(scored, positional)| ScoredMove::new(scored.mv, *positional))
                .collect();
        }
        if pool.is_empty() {
            pool = scored
                .iter()
                .map(|(scored, positional)| ScoredMove::new(scored.mv, *positional))
                .collect();
        }

        let best = pool.iter().map(|scored| scored.score).max()?;
        let ties: Vec<Move> = pool
            .iter()
            .filter(|scored| scored.score == best)
            .map(|scored| scored.mv)
            .collect();

        let choice = ties.get(self.rng.random_range(0..ties.len())).copied();
        if let Some(mv) = choice {
            debug!(
                "[ENGINE] {} plays {} (score {}, {} tied)",
                side_name(color),
                mv,
                best,
                ties.len()
            );
        }
        choice
    }
}

/// Full heuristic score: tactics, position and the side-specific terms
fn total_score(
    ctx: &ScoringContext<'_>,
    candidate: &Candidate,
    positional: i32,
    in_check: bool,
) -> i32 {
    let base = base_score(ctx, candidate);
    if base == REJECTED_SCORE {
        return REJECTED_SCORE;
    }

    let mut score = base + positional;
    if ctx.color != FIRST_SIDE {
        score += defensive_score(ctx, candidate);
    }
    if in_check {
        score += check_response_score(ctx, candidate);
    }

    // A rook move without purpose stays negative whatever the other terms add.
    // Blocking or taking a checker counts as escaping the threat.
    let resolves_check = in_check && !is_in_check(&candidate.after, ctx.color);
    if candidate.kind() == ROOK_ID && !resolves_check && !rook_move_has_purpose(ctx, candidate) {
        score = score.min(-IDLE_ROOK_PENALTY);
    }
    score
}

fn side_name(color: Color) -> &'static str {
    if color == COLOR_WHITE {
        "white"
    } else {
        "black"
    }
}
