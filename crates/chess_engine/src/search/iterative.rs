//! Iterative deepening driver
//!
//! Runs alpha-beta from scratch at depths 1, 2, ... `max_depth` and keeps the move of
//! the deepest completed iteration. Termination is purely depth-bounded.

use super::alphabeta::alpha_beta_node;
use super::{SearchOutcome, SearchStats};
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::evaluation::Evaluator;
use crate::position::GamePosition;
use crate::types::{Color, Score};
use tracing::debug;

/// Find the best move by iterative deepening over alpha-beta
///
/// The side to move maximizes when it is White. Node and cutoff counts are totals
/// over all iterations.
///
/// # Errors
///
/// `max_depth == 0` is rejected with [`ChessEngineError::InvalidDepth`]; search errors
/// from any iteration are propagated.
pub fn iterative_deepening<P, E>(
    position: &mut P,
    max_depth: u32,
    evaluator: &E,
) -> ChessEngineResult<SearchOutcome<P::Move>>
where
    P: GamePosition,
    E: Evaluator<P>,
{
    if max_depth == 0 {
        return Err(ChessEngineError::InvalidDepth { depth: max_depth });
    }

    let maximizing = position.side_to_move() == Color::White;
    let mut stats = SearchStats::default();
    let mut best_move = None;
    let mut score = 0.0;
    let mut completed_depth = 0;

    for depth in 1..=max_depth {
        let nodes_before = stats.nodes;
        let (iteration_score, iteration_move) = alpha_beta_node(
            position,
            depth,
            Score::NEG_INFINITY,
            Score::INFINITY,
            maximizing,
            evaluator,
            &mut stats,
        )?;

        score = iteration_score;
        best_move = iteration_move;
        completed_depth = depth;

        debug!(
            depth,
            score,
            nodes = stats.nodes - nodes_before,
            best = ?best_move,
            "iterative deepening iteration complete"
        );
    }

    Ok(stats.into_outcome(score, best_move, completed_depth))
}
