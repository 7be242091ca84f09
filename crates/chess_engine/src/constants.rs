//! # Chess Engine Constants - Piece Encoding, Values & Search Defaults
//!
//! ## Overview
//!
//! This module centralizes the constant values used throughout the engine: the signed piece
//! encoding of the mailbox board, piece valuations (in pawns), movement direction vectors,
//! well-known squares, and the default limits used by the search strategies.
//!
//! ## Pawn-Unit Valuation
//!
//! Scores are expressed in **pawns** as `f64`, not centipawns. The evaluator adds fractional
//! positional terms (0.1 per move of mobility, 0.2 for a doubled pawn, ...) directly on top of
//! material, so a floating-point pawn unit keeps every term in the same scale:
//!
//! - **Pawn**: 1
//! - **Knight**: 3
//! - **Bishop**: 3
//! - **Rook**: 5
//! - **Queen**: 9
//! - **King**: 0 (never traded; loss of the king is expressed by the mate sentinel)
//!
//! ### Mate Sentinel
//!
//! [`MATE_SCORE`] (9999) dominates every heuristic sum the evaluator can produce (the largest
//! material imbalance is well under 200), so `max`/`min` comparisons always prefer a forced mate
//! over any material gain. A positive sentinel means White has mated, a negative one Black.
//!
//! ## Direction Vectors
//!
//! Directions are `(file, rank)` deltas rather than linear offsets, so stepping off the board
//! is detected by a coordinate range check instead of wrap-around heuristics.

use crate::types::Board;

pub const VOID_ID: i8 = 0;
pub const PAWN_ID: i8 = 1;
pub const KNIGHT_ID: i8 = 2;
pub const BISHOP_ID: i8 = 3;
pub const ROOK_ID: i8 = 4;
pub const QUEEN_ID: i8 = 5;
pub const KING_ID: i8 = 6;

pub const W_PAWN: i8 = PAWN_ID;
pub const W_KNIGHT: i8 = KNIGHT_ID;
pub const W_BISHOP: i8 = BISHOP_ID;
pub const W_ROOK: i8 = ROOK_ID;
pub const W_QUEEN: i8 = QUEEN_ID;
pub const W_KING: i8 = KING_ID;

pub const B_PAWN: i8 = -PAWN_ID;
pub const B_KNIGHT: i8 = -KNIGHT_ID;
pub const B_BISHOP: i8 = -BISHOP_ID;
pub const B_ROOK: i8 = -ROOK_ID;
pub const B_QUEEN: i8 = -QUEEN_ID;
pub const B_KING: i8 = -KING_ID;

/// Pieces a pawn may promote to, strongest first
pub const PROMOTION_IDS: [i8; 4] = [QUEEN_ID, ROOK_ID, BISHOP_ID, KNIGHT_ID];

pub const ROOK_DIRS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const KNIGHT_DIRS: [(i8, i8); 8] = [
    (1, 2), (-1, 2), (1, -2), (-1, -2),
    (2, 1), (2, -1), (-2, 1), (-2, -1),
];
pub const KING_DIRS: [(i8, i8); 8] = [
    (0, 1), (1, 0), (0, -1), (-1, 0),
    (1, 1), (1, -1), (-1, 1), (-1, -1),
];

pub const VOID_VALUE: f64 = 0.0;
pub const PAWN_VALUE: f64 = 1.0;
pub const KNIGHT_VALUE: f64 = 3.0;
pub const BISHOP_VALUE: f64 = 3.0;
pub const ROOK_VALUE: f64 = 5.0;
pub const QUEEN_VALUE: f64 = 9.0;
pub const KING_VALUE: f64 = 0.0;

/// Material value indexed by piece id
pub const FIGURE_VALUE: [f64; KING_ID as usize + 1] = [
    VOID_VALUE,
    PAWN_VALUE,
    KNIGHT_VALUE,
    BISHOP_VALUE,
    ROOK_VALUE,
    QUEEN_VALUE,
    KING_VALUE,
];

/// Score of a position in which White has delivered mate
pub const MATE_SCORE: f64 = 9999.0;

/// Standard starting position, a1 = 0, h8 = 63
pub const SETUP: Board = [
    W_ROOK, W_KNIGHT, W_BISHOP, W_QUEEN, W_KING, W_BISHOP, W_KNIGHT, W_ROOK,
    W_PAWN, W_PAWN, W_PAWN, W_PAWN, W_PAWN, W_PAWN, W_PAWN, W_PAWN,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    B_PAWN, B_PAWN, B_PAWN, B_PAWN, B_PAWN, B_PAWN, B_PAWN, B_PAWN,
    B_ROOK, B_KNIGHT, B_BISHOP, B_QUEEN, B_KING, B_BISHOP, B_KNIGHT, B_ROOK,
];

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const A1: u8 = 0;
pub const C1: u8 = 2;
pub const D1: u8 = 3;
pub const E1: u8 = 4;
pub const F1: u8 = 5;
pub const G1: u8 = 6;
pub const H1: u8 = 7;
pub const A8: u8 = 56;
pub const C8: u8 = 58;
pub const D8: u8 = 59;
pub const E8: u8 = 60;
pub const F8: u8 = 61;
pub const G8: u8 = 62;
pub const H8: u8 = 63;

/// Halfmove clock value at which a fifty-move draw can be claimed
pub const FIFTY_MOVE_PLIES: u32 = 100;

/// Number of occurrences of a position that allow a repetition claim
pub const REPETITION_CLAIM: usize = 3;

pub const DEFAULT_MINIMAX_DEPTH: u32 = 3;
pub const DEFAULT_ALPHABETA_DEPTH: u32 = 4;
pub const DEFAULT_IDDFS_DEPTH: u32 = 4;
pub const DEFAULT_MCTS_SIMULATIONS: u32 = 300;

pub const FIG_STR: [char; 7] = [' ', 'p', 'n', 'b', 'r', 'q', 'k'];
