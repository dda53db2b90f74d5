//! # Engine Constants - Piece Encoding, Values & Heuristic Weights
//!
//! ## Piece Encoding
//!
//! Squares hold a signed byte. Zero is an empty square, the absolute value is
//! the piece kind and the sign is the side that owns it:
//!
//! | Value | Piece  |
//! |-------|--------|
//! | 1     | Pawn   |
//! | 2     | Rook   |
//! | 3     | Knight |
//! | 4     | Bishop |
//! | 5     | Queen  |
//! | 6     | King   |
//!
//! Positive pieces belong to White (the side that moves first), negative
//! pieces to Black. The same sign convention is used for the side-to-move
//! value passed around the engine (`COLOR_WHITE = 1`, `COLOR_BLACK = -1`), so
//! `piece.signum() == color` answers "does this piece belong to color".
//!
//! ## Centipawn Values
//!
//! Pawn 100, knight 300, bishop 300, rook 500, queen 900. The king is given
//! 10,000 so that no exchange ever looks favourable against it. These values
//! drive both the threat analyzer's "cheaper attacker" rule and the capture
//! differential in move scoring.
//!
//! ## Heuristic Weights
//!
//! The second half of this module holds the weights used by the move
//! selector. They are plain integers added to a candidate's score; the
//! absolute scale is anchored on the pawn value so that a weight of 100 is
//! "worth a pawn".

pub const PAWN_ID: i8 = 1;
pub const ROOK_ID: i8 = 2;
pub const KNIGHT_ID: i8 = 3;
pub const BISHOP_ID: i8 = 4;
pub const QUEEN_ID: i8 = 5;
pub const KING_ID: i8 = 6;

pub const W_PAWN: i8 = PAWN_ID;
pub const W_ROOK: i8 = ROOK_ID;
pub const W_KNIGHT: i8 = KNIGHT_ID;
pub const W_BISHOP: i8 = BISHOP_ID;
pub const W_QUEEN: i8 = QUEEN_ID;
pub const W_KING: i8 = KING_ID;

pub const B_PAWN: i8 = -PAWN_ID;
pub const B_ROOK: i8 = -ROOK_ID;
pub const B_KNIGHT: i8 = -KNIGHT_ID;
pub const B_BISHOP: i8 = -BISHOP_ID;
pub const B_QUEEN: i8 = -QUEEN_ID;
pub const B_KING: i8 = -KING_ID;

pub const COLOR_WHITE: i8 = 1;
pub const COLOR_BLACK: i8 = -1;

/// The side that makes the first move of a game.
pub const FIRST_SIDE: i8 = COLOR_WHITE;

pub const BOARD_SIZE: i8 = 8;

pub const VOID_VALUE: i32 = 0;
pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 300;
pub const BISHOP_VALUE: i32 = 300;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 10000;

/// Indexed by piece id (absolute piece value).
pub const FIGURE_VALUE: [i32; KING_ID as usize + 1] = [
    VOID_VALUE,
    PAWN_VALUE,
    ROOK_VALUE,
    KNIGHT_VALUE,
    BISHOP_VALUE,
    QUEEN_VALUE,
    KING_VALUE,
];

/// Row 0 is White's back rank, row 7 is Black's.
pub const SETUP: [[i8; 8]; 8] = [
    [W_ROOK, W_KNIGHT, W_BISHOP, W_QUEEN, W_KING, W_BISHOP, W_KNIGHT, W_ROOK],
    [W_PAWN; 8],
    [0; 8],
    [0; 8],
    [0; 8],
    [0; 8],
    [B_PAWN; 8],
    [B_ROOK, B_KNIGHT, B_BISHOP, B_QUEEN, B_KING, B_BISHOP, B_KNIGHT, B_ROOK],
];

/// (row, col) step vectors
pub const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 0), (-1, 0), (0, 1), (0, -1),
    (1, 1), (1, -1), (-1, 1), (-1, -1),
];
pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1), (2, -1), (-2, 1), (-2, -1),
    (1, 2), (1, -2), (-1, 2), (-1, -2),
];
pub const KING_STEPS: [(i8, i8); 8] = QUEEN_DIRS;

// Phase boundaries

/// Engine calls up to and including this count may be answered from the book.
pub const OPENING_PLY_LIMIT: u32 = 10;
/// King moves before this engine call count are "early" for king heuristics.
pub const EARLY_GAME_LIMIT: u32 = 20;
/// Endgame once at most this many non-king pieces remain on the board.
pub const ENDGAME_PIECE_THRESHOLD: usize = 10;

// Base (tactical) weights

pub const REJECTED_SCORE: i32 = -100_000;
pub const EQUAL_CAPTURE_BONUS: i32 = 50;
pub const ESCAPE_BONUS: i32 = 120;
pub const KING_PRESSURE_BONUS: i32 = 250;
pub const IDLE_ROOK_PENALTY: i32 = 25;

// Positional add-ons

pub const KING_CORNER_PENALTY: i32 = 30;
pub const KNIGHT_CENTER_BONUS: i32 = 20;
pub const KNIGHT_DEVELOPMENT_BONUS: i32 = 15;
pub const KNIGHT_ESCAPE_BONUS: i32 = 40;
pub const ROOK_LEAVE_PENALTY: i32 = 40;
pub const CASTLE_SHAPE_BONUS: i32 = 60;
pub const EARLY_KING_PENALTY: i32 = 50;
pub const KING_EDGE_BONUS: i32 = 10;
pub const KING_CORNER_EDGE_BONUS: i32 = 5;
pub const KING_SHELTER_BONUS: i32 = 8;
pub const ENDGAME_KING_EDGE_BONUS: i32 = 4;

// Second side defensive terms

pub const DEFENSIVE_PROXIMITY_BONUS: i32 = 15;
pub const DEFENSIVE_CASTLE_BONUS: i32 = 40;
pub const CENTER_CLUSTER_BONUS: i32 = 20;
pub const MAJOR_SUPPORT_BONUS: i32 = 10;

// Check response terms

pub const CHECK_RESOLVED_BONUS: i32 = 500;
pub const CHECK_UNRESOLVED_PENALTY: i32 = 500;
pub const CHEAP_RESPONDER_BONUS: i32 = 100;
pub const KING_RESPONSE_PENALTY: i32 = 100;
pub const ESCAPE_SQUARE_SQUEEZE_BONUS: i32 = 15;
