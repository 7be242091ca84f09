//! Error types for chess engine
//!
//! Provides custom error types for chess engine operations including
//! position setup, move validation, search invariants, and strategy selection.

use thiserror::Error;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChessEngineError {
    /// FEN string could not be parsed into a legal position
    #[error("Invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    /// Piece placement does not describe a playable position
    #[error("Invalid position: {reason}")]
    InvalidPosition { reason: String },

    /// Move text or move value not present in the legal-move set
    #[error("Illegal move: {mv}")]
    IllegalMove { mv: String },

    /// Undo requested with no applied move to revert
    #[error("No move to undo")]
    EmptyHistory,

    /// Search requested on a finished game
    #[error("Game is already over")]
    GameOver,

    /// Root position offers no legal move to choose from
    #[error("Position has no legal moves")]
    NoLegalMoves,

    /// Rules engine reported no moves for a position it does not flag as terminal
    #[error("Rules engine returned no legal moves for a non-terminal position at depth {depth}")]
    MissingLegalMoves { depth: u32 },

    /// Depth-bounded search asked for zero plies where a move is required
    #[error("Search depth must be at least 1, got {depth}")]
    InvalidDepth { depth: u32 },

    /// MCTS asked for zero simulations
    #[error("MCTS needs at least one simulation")]
    InvalidSimulationCount,

    /// Search parameter outside its valid range
    #[error("Invalid search configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Strategy name not recognised
    #[error("Unknown search strategy '{name}' (expected minimax, alphabeta, iddfs, mcts or random)")]
    UnknownStrategy { name: String },

    /// Search finished without producing a move
    #[error("Strategy {strategy} produced no move")]
    NoMoveFound { strategy: String },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
