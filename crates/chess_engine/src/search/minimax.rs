//! Exhaustive fixed-depth minimax

use super::{moves_or_fail, with_move, SearchOutcome, SearchStats};
use crate::error::ChessEngineResult;
use crate::evaluation::Evaluator;
use crate::position::GamePosition;
use crate::types::Score;
use tracing::debug;

/// Full-width minimax search to `depth` plies
///
/// The first move reaching the best score in generation order wins ties. At depth 0 or
/// on a terminal position the static score is returned with no move.
pub fn minimax<P, E>(
    position: &mut P,
    depth: u32,
    maximizing: bool,
    evaluator: &E,
) -> ChessEngineResult<SearchOutcome<P::Move>>
where
    P: GamePosition,
    E: Evaluator<P>,
{
    let mut stats = SearchStats::default();
    let (score, best_move) = minimax_node(position, depth, maximizing, evaluator, &mut stats)?;
    debug!(depth, score, nodes = stats.nodes, "minimax complete");
    Ok(stats.into_outcome(score, best_move, depth))
}

fn minimax_node<P, E>(
    position: &mut P,
    depth: u32,
    maximizing: bool,
    evaluator: &E,
    stats: &mut SearchStats,
) -> ChessEngineResult<(Score, Option<P::Move>)>
where
    P: GamePosition,
    E: Evaluator<P>,
{
    stats.nodes += 1;
    if depth == 0 || position.is_terminal() {
        return Ok((evaluator.evaluate(position), None));
    }

    let mut best_score = if maximizing { Score::NEG_INFINITY } else { Score::INFINITY };
    let mut best_move = None;

    for mv in moves_or_fail(position, depth)? {
        let (score, _) = with_move(position, mv, |child| {
            minimax_node(child, depth - 1, !maximizing, evaluator, stats)
        })?;

        let improves = if maximizing { score > best_score } else { score < best_score };
        if improves {
            best_score = score;
            best_move = Some(mv);
        }
    }

    Ok((best_score, best_move))
}
