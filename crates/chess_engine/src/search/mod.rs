//! Depth-first game-tree search
//!
//! This module implements the classic searches used by the engine:
//! - Exhaustive minimax to a fixed depth
//! - Alpha-beta pruning, extended at the horizon by a capture-only quiescence search
//! - Iterative deepening over alpha-beta
//! - A uniformly random move, the baseline opponent in engine matches
//!
//! Every search is generic over [`GamePosition`] and an [`Evaluator`], works on the caller's
//! position with apply/undo, and leaves it exactly as it found it on every return path,
//! early cutoffs and errors included. Scores are always from White's point of view;
//! `maximizing` selects whether the side to move picks the highest or lowest child.
//!
//! ## Module Organization
//!
//! - `minimax` - Full-width fixed-depth minimax
//! - `alphabeta` - Alpha-beta with quiescence at the leaves
//! - `quiescence` - Capture-only extension search
//! - `iterative` - Iterative deepening driver
//! - `random` - Random legal move

mod alphabeta;
mod iterative;
mod minimax;
mod quiescence;
mod random;

pub use alphabeta::alpha_beta;
pub use iterative::iterative_deepening;
pub use minimax::minimax;
pub use quiescence::quiescence;
pub use random::random_move;

use crate::error::{ChessEngineError, ChessEngineResult};
use crate::position::GamePosition;
use crate::types::Score;

/// Result of a depth-first search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<M> {
    /// Score of the position from White's point of view
    pub score: Score,
    /// Best move found, `None` at depth 0 or on a terminal position
    pub best_move: Option<M>,
    /// Deepest completed depth
    pub depth: u32,
    /// Nodes visited, quiescence nodes included
    pub nodes: u64,
    /// Beta/alpha cutoffs taken
    pub cutoffs: u64,
}

/// Node and cutoff counters threaded through a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

impl SearchStats {
    pub(crate) fn into_outcome<M>(self, score: Score, best_move: Option<M>, depth: u32) -> SearchOutcome<M> {
        SearchOutcome {
            score,
            best_move,
            depth,
            nodes: self.nodes,
            cutoffs: self.cutoffs,
        }
    }
}

/// Legal moves of a position the caller already knows is not terminal
///
/// An empty list here means the rules engine contradicted its own terminal check.
pub(crate) fn moves_or_fail<P: GamePosition>(position: &P, depth: u32) -> ChessEngineResult<Vec<P::Move>> {
    let moves = position.legal_moves();
    if moves.is_empty() {
        return Err(ChessEngineError::MissingLegalMoves { depth });
    }
    Ok(moves)
}

/// Apply `mv`, run `search` on the child, and undo before reporting the child's result
pub(crate) fn with_move<P, T>(
    position: &mut P,
    mv: P::Move,
    search: impl FnOnce(&mut P) -> ChessEngineResult<T>,
) -> ChessEngineResult<T>
where
    P: GamePosition,
{
    position.apply(mv);
    let result = search(position);
    position.undo()?;
    result
}
