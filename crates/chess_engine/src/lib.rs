//! Chess search engine
//!
//! Legal chess rules on a 64-square mailbox board, a static evaluator, and a family of
//! interchangeable search strategies (minimax, alpha-beta with quiescence, iterative
//! deepening, Monte Carlo Tree Search, random) written against the [`GamePosition`]
//! contract.
//!
//! ## Module Organization
//!
//! - `types` / `constants` - Core types, piece ids and tuning constants
//! - `board` - Square arithmetic and board queries
//! - `hash` - Position keys for repetition detection
//! - `move_gen` - Pseudo-legal and legal move generation
//! - `game` - Game state, FEN, make/unmake, draw rules, random endgames
//! - `position` - The trait every search is generic over
//! - `evaluation` - Static evaluation
//! - `search` - Depth-first searches
//! - `mcts` - Monte Carlo Tree Search
//! - `strategy` - Strategy selection by name

pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod game;
pub mod hash;
pub mod mcts;
pub mod move_gen;
pub mod position;
pub mod search;
pub mod strategy;
pub mod types;

pub use error::{ChessEngineError, ChessEngineResult};
pub use evaluation::{evaluate_position, EvaluationBreakdown, Evaluator, GamePhase, StaticEvaluator};
pub use game::{random_endgame, Game, PieceCounts};
pub use mcts::{mcts, MctsConfig};
pub use position::GamePosition;
pub use search::{alpha_beta, iterative_deepening, minimax, quiescence, random_move, SearchOutcome, SearchStats};
pub use strategy::{choose_move, MoveChoice, SearchConfig, Strategy};
pub use types::{CastlingRights, ChessMove, Color, DrawReason, GameStatus, Score, Square};
