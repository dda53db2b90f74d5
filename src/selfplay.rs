//! Engine-vs-engine games
//!
//! Plays one game between two selectors and reports how it ended. This is
//! the whole "external caller" side of the engine: ask for a move, apply it,
//! hand the turn over, stop when a side cannot move, loses its king or the
//! ply limit is reached.

use crate::core::CoreResult;
use chess_engine::api::{self, Game, GameSnapshot, GameState};
use chess_engine::evaluation::material_balance;
use chess_engine::types::Color;
use chess_engine::EngineConfig;
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEnd {
    /// The side to move had no candidate move
    NoMoves { side: Color, in_check: bool },
    KingCaptured { winner: Color },
    PlyLimit,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelfPlayReport {
    pub seed: Option<u64>,
    pub plies: usize,
    pub end: GameEnd,
    /// White minus Black, in centipawns
    pub material: i32,
    pub snapshot: GameSnapshot,
}

/// Play a game to completion
pub fn play_game(config: EngineConfig, max_plies: usize) -> CoreResult<(Game, GameEnd)> {
    let mut game = api::new_game(config);

    let end = loop {
        match api::get_game_state(&game) {
            GameState::KingCaptured { winner } => break GameEnd::KingCaptured { winner },
            GameState::NoMoves { in_check } => {
                break GameEnd::NoMoves {
                    side: game.side_to_move,
                    in_check,
                }
            }
            GameState::Playing { in_check } => {
                if in_check {
                    debug!("[SELFPLAY] {} is in check", side_name(game.side_to_move));
                }
            }
        }

        if game.ply() >= max_plies {
            break GameEnd::PlyLimit;
        }

        let side = game.side_to_move;
        let Some(mv) = api::reply(&mut game) else {
            break GameEnd::NoMoves {
                side,
                in_check: chess_engine::is_in_check(&game.position, side),
            };
        };
        let captured = api::do_move(&mut game, mv)?;

        info!(
            "[SELFPLAY] {:>3}. {} {}{}",
            game.ply(),
            side_name(side),
            mv,
            if captured != 0 { " x" } else { "" }
        );
    };

    info!("[SELFPLAY] game over after {} plies: {:?}", game.ply(), end);
    Ok((game, end))
}

/// Play a game and collect everything worth printing about it
pub fn run(config: EngineConfig, max_plies: usize) -> CoreResult<SelfPlayReport> {
    let seed = config.seed;
    let (game, end) = play_game(config, max_plies)?;

    Ok(SelfPlayReport {
        seed,
        plies: game.ply(),
        end,
        material: material_balance(&game.position),
        snapshot: api::snapshot(&game),
    })
}

fn side_name(color: Color) -> &'static str {
    if color > 0 {
        "white"
    } else {
        "black"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ply_limit_stops_game() {
        let (game, end) = play_game(EngineConfig::seeded(3), 6).expect("game plays");
        assert_eq!(end, GameEnd::PlyLimit);
        assert_eq!(game.ply(), 6);
    }

    #[test]
    fn test_zero_plies_plays_nothing() {
        let report = run(EngineConfig::seeded(3), 0).expect("game plays");
        assert_eq!(report.plies, 0);
        assert_eq!(report.material, 0);
        assert_eq!(report.seed, Some(3));
    }
}
