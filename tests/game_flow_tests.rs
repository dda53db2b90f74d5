//! Game Flow Integration Tests
//!
//! Tests for full game flows including:
//! - Turn alternation
//! - Piece movement validation
//! - Game state transitions
//! - Engine-vs-engine games

use chess_engine::api::{do_move, get_game_state, new_game, reply, GameState};
use chess_engine::constants::{
    B_KING, B_PAWN, COLOR_BLACK, COLOR_WHITE, W_KING, W_KNIGHT, W_PAWN,
};
use chess_engine::move_gen::generate_candidate_moves;
use chess_engine::types::Move;
use chess_engine::{ChessEngineError, EngineConfig, Position};
use chess_selfplay::selfplay::{play_game, run, GameEnd};

// ============================================================================
// Turn Alternation Tests
// ============================================================================

#[test]
fn test_white_moves_first() {
    let game = new_game(EngineConfig::seeded(1));
    assert_eq!(game.side_to_move, COLOR_WHITE);

    let white_moves = generate_candidate_moves(&game.position, COLOR_WHITE);
    assert!(
        !white_moves.is_empty(),
        "White should have moves from starting position"
    );
}

#[test]
fn test_sides_alternate() {
    let mut game = new_game(EngineConfig::seeded(2));

    for ply in 0..6 {
        let expected = if ply % 2 == 0 { COLOR_WHITE } else { COLOR_BLACK };
        assert_eq!(game.side_to_move, expected, "wrong side to move at ply {}", ply);

        let mv = reply(&mut game).expect("side to move should have a reply");
        do_move(&mut game, mv).expect("engine reply should be valid");
    }
    assert_eq!(game.ply(), 6);
}

#[test]
fn test_moving_out_of_turn_is_rejected() {
    let mut game = new_game(EngineConfig::seeded(3));

    let result = do_move(&mut game, Move::new(6, 4, 5, 4));
    assert!(
        matches!(result, Err(ChessEngineError::WrongPieceColor { .. })),
        "Black should not move first"
    );
    assert_eq!(game.position, Position::starting());
}

// ============================================================================
// Piece Movement Tests
// ============================================================================

#[test]
fn test_pawn_moves_one_square() {
    let mut game = new_game(EngineConfig::seeded(4));

    assert!(
        do_move(&mut game, Move::new(1, 4, 3, 4)).is_err(),
        "e2-e4 double push is not a legal move here"
    );
    assert_eq!(do_move(&mut game, Move::new(1, 4, 2, 4)), Ok(0));
    assert_eq!(game.position.get(2, 4), W_PAWN, "e3 should hold the pawn");
    assert!(game.position.is_empty(1, 4), "e2 should be empty");
}

#[test]
fn test_knight_develops_from_start() {
    let mut game = new_game(EngineConfig::seeded(5));

    assert_eq!(do_move(&mut game, Move::new(0, 6, 2, 5)), Ok(0));
    assert_eq!(game.position.get(2, 5), W_KNIGHT, "f3 should hold the knight");
}

// ============================================================================
// Capture Tests
// ============================================================================

#[test]
fn test_capture_returns_taken_piece() {
    let mut game = new_game(EngineConfig::seeded(6));
    game.position = Position::empty();
    game.position.set(0, 4, W_KING);
    game.position.set(7, 4, B_KING);
    game.position.set(3, 3, W_PAWN);
    game.position.set(4, 4, B_PAWN);

    assert_eq!(do_move(&mut game, Move::new(3, 3, 4, 4)), Ok(B_PAWN));
    assert_eq!(game.position.count_pieces(COLOR_BLACK), 1);
}

#[test]
fn test_king_capture_ends_game() {
    let mut game = new_game(EngineConfig::seeded(7));
    game.position = Position::empty();
    game.position.set(0, 4, W_KING);
    game.position.set(5, 3, W_PAWN);
    game.position.set(6, 4, B_KING);

    do_move(&mut game, Move::new(5, 3, 6, 4)).expect("pawn takes king");
    assert_eq!(
        get_game_state(&game),
        GameState::KingCaptured {
            winner: COLOR_WHITE
        }
    );
}

// ============================================================================
// Board State Tests
// ============================================================================

#[test]
fn test_initial_king_positions() {
    let game = new_game(EngineConfig::default());

    assert_eq!(game.position.get(0, 4), W_KING, "White king should be on e1");
    assert_eq!(game.position.get(7, 4), B_KING, "Black king should be on e8");
}

#[test]
fn test_piece_count_starting_position() {
    let game = new_game(EngineConfig::default());

    assert_eq!(game.position.count_pieces(COLOR_WHITE), 16);
    assert_eq!(game.position.count_pieces(COLOR_BLACK), 16);
}

// ============================================================================
// Self-Play Tests
// ============================================================================

#[test]
fn test_selfplay_respects_ply_limit() {
    let (game, end) = play_game(EngineConfig::seeded(11), 20).expect("game should play");

    assert!(game.ply() <= 20);
    if end == GameEnd::PlyLimit {
        assert_eq!(game.ply(), 20);
    }
    assert_eq!(game.history.len(), game.ply());
}

#[test]
fn test_selfplay_is_reproducible() {
    let first = run(EngineConfig::seeded(42), 40).expect("game should play");
    let second = run(EngineConfig::seeded(42), 40).expect("game should play");

    assert_eq!(first.snapshot, second.snapshot);
    assert_eq!(first.end, second.end);
}

#[test]
fn test_selfplay_opens_from_book() {
    let (game, _) = play_game(EngineConfig::seeded(9), 2).expect("game should play");

    let first = game.history[0].to_string();
    assert!(
        ["e2e3", "d2d3", "g1f3"].contains(&first.as_str()),
        "unexpected first move {}",
        first
    );
}

#[test]
fn test_selfplay_report_serializes() {
    let report = run(EngineConfig::seeded(13), 10).expect("game should play");
    let json = serde_json::to_value(&report).expect("report should serialize");

    assert_eq!(json["seed"], 13);
    assert!(json["snapshot"]["board"].is_array());
    assert!(json["end"]["kind"].is_string());
}
