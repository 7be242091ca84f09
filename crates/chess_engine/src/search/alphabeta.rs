//! Alpha-beta search with quiescence at the horizon
//!
//! Same control flow as minimax, but the `(alpha, beta)` window lets a node stop
//! searching as soon as the opponent already has a refutation. Moves are searched in
//! generation order; only the quiescence phase filters moves.

use super::quiescence::quiescence;
use super::{moves_or_fail, with_move, SearchOutcome, SearchStats};
use crate::error::ChessEngineResult;
use crate::evaluation::Evaluator;
use crate::position::GamePosition;
use crate::types::Score;
use tracing::trace;

/// Alpha-beta search to `depth` plies inside the `(alpha, beta)` window
///
/// At depth 0 or on a terminal position the score comes from [`quiescence`] and no
/// move is returned.
///
/// # Errors
///
/// Returns [`crate::ChessEngineError::MissingLegalMoves`] when the position reports no
/// legal moves without being terminal, and propagates undo failures.
pub fn alpha_beta<P, E>(
    position: &mut P,
    depth: u32,
    alpha: Score,
    beta: Score,
    maximizing: bool,
    evaluator: &E,
) -> ChessEngineResult<SearchOutcome<P::Move>>
where
    P: GamePosition,
    E: Evaluator<P>,
{
    let mut stats = SearchStats::default();
    let (score, best_move) = alpha_beta_node(position, depth, alpha, beta, maximizing, evaluator, &mut stats)?;
    trace!(depth, score, nodes = stats.nodes, cutoffs = stats.cutoffs, "alpha-beta complete");
    Ok(stats.into_outcome(score, best_move, depth))
}

pub(crate) fn alpha_beta_node<P, E>(
    position: &mut P,
    depth: u32,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    evaluator: &E,
    stats: &mut SearchStats,
) -> ChessEngineResult<(Score, Option<P::Move>)>
where
    P: GamePosition,
    E: Evaluator<P>,
{
    if depth == 0 || position.is_terminal() {
        let score = quiescence(position, alpha, beta, maximizing, evaluator, stats)?;
        return Ok((score, None));
    }
    stats.nodes += 1;

    let mut best_score = if maximizing { Score::NEG_INFINITY } else { Score::INFINITY };
    let mut best_move = None;

    for mv in moves_or_fail(position, depth)? {
        let (score, _) = with_move(position, mv, |child| {
            alpha_beta_node(child, depth - 1, alpha, beta, !maximizing, evaluator, stats)
        })?;

        if maximizing {
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score {
                best_score = score;
                best_move = Some(mv);
            }
            beta = beta.min(score);
        }

        if beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    Ok((best_score, best_move))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MATE_SCORE;
    use crate::evaluation::StaticEvaluator;
    use crate::game::Game;
    use crate::search::minimax;
    use crate::search::test_support::{PathEvaluator, TreeGame};

    #[test]
    fn test_matches_minimax_without_captures() {
        for depth in 1..=4 {
            let mut game = TreeGame::new(3, 6);
            let full = minimax(&mut game, depth, true, &PathEvaluator).unwrap();
            let pruned =
                alpha_beta(&mut game, depth, Score::NEG_INFINITY, Score::INFINITY, true, &PathEvaluator).unwrap();
            assert_eq!(full.score, pruned.score, "depth {depth}");
            assert!(pruned.nodes <= full.nodes);
        }
    }

    #[test]
    fn test_finds_back_rank_mate() {
        let mut game = Game::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
        let outcome =
            alpha_beta(&mut game, 2, Score::NEG_INFINITY, Score::INFINITY, true, &StaticEvaluator).unwrap();
        assert_eq!(outcome.best_move.map(|mv| mv.to_string()), Some("a1a8".to_string()));
        assert_eq!(outcome.score, MATE_SCORE);
    }

    #[test]
    fn test_terminal_root_returns_no_move() {
        let mut game = Game::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        let outcome =
            alpha_beta(&mut game, 3, Score::NEG_INFINITY, Score::INFINITY, false, &StaticEvaluator).unwrap();
        assert_eq!(outcome.best_move, None);
        assert_eq!(outcome.score, MATE_SCORE);
    }

    #[test]
    fn test_position_restored_after_search() {
        let mut game = Game::from_fen("r3k2r/ppp2ppp/2n5/3q4/3P4/2N5/PPP2PPP/R2QK2R w KQkq - 0 1").unwrap();
        let before = game.clone();
        alpha_beta(&mut game, 2, Score::NEG_INFINITY, Score::INFINITY, true, &StaticEvaluator).unwrap();
        assert_eq!(game, before);
    }
}
