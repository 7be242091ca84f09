//! Quiescence search to avoid the horizon effect
//!
//! Past the nominal depth only captures are searched, until the position is quiet or a
//! cutoff fires. The static "stand-pat" score bounds the result: the side to move may
//! always decline to capture.

use super::{with_move, SearchStats};
use crate::error::ChessEngineResult;
use crate::evaluation::Evaluator;
use crate::position::GamePosition;
use crate::types::Score;

/// Capture-only search inside the `(alpha, beta)` window
///
/// Minimax-style: the same window is threaded through both sides, with the maximizing
/// side raising `alpha` and the minimizing side lowering `beta`.
pub fn quiescence<P, E>(
    position: &mut P,
    alpha: Score,
    beta: Score,
    maximizing: bool,
    evaluator: &E,
    stats: &mut SearchStats,
) -> ChessEngineResult<Score>
where
    P: GamePosition,
    E: Evaluator<P>,
{
    stats.nodes += 1;
    let stand_pat = evaluator.evaluate(position);
    if position.is_terminal() {
        return Ok(stand_pat);
    }

    let (mut alpha, mut beta) = (alpha, beta);
    if maximizing {
        if stand_pat >= beta {
            stats.cutoffs += 1;
            return Ok(stand_pat);
        }
        alpha = alpha.max(stand_pat);
    } else {
        if stand_pat <= alpha {
            stats.cutoffs += 1;
            return Ok(stand_pat);
        }
        beta = beta.min(stand_pat);
    }

    let captures: Vec<P::Move> = position
        .legal_moves()
        .into_iter()
        .filter(|&mv| position.is_capture(mv))
        .collect();

    for mv in captures {
        let score = with_move(position, mv, |child| {
            quiescence(child, alpha, beta, !maximizing, evaluator, stats)
        })?;

        if maximizing {
            alpha = alpha.max(score);
        } else {
            beta = beta.min(score);
        }
        if alpha >= beta {
            stats.cutoffs += 1;
            break;
        }
    }

    Ok(if maximizing { alpha } else { beta })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{evaluate_position, StaticEvaluator};
    use crate::game::Game;
    use crate::search::test_support::{PathEvaluator, TreeGame};

    #[test]
    fn test_quiet_position_returns_stand_pat() {
        let mut game = Game::new();
        let mut stats = SearchStats::default();
        let score = quiescence(
            &mut game,
            Score::NEG_INFINITY,
            Score::INFINITY,
            true,
            &StaticEvaluator,
            &mut stats,
        )
        .unwrap();
        assert_eq!(score, evaluate_position(&game));
        assert_eq!(stats.nodes, 1);
    }

    #[test]
    fn test_hanging_queen_is_captured() {
        // White to move can take the undefended queen on d5
        let mut game = Game::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1").unwrap();
        let before = game.clone();
        let stand_pat = evaluate_position(&game);
        let mut stats = SearchStats::default();
        let score = quiescence(
            &mut game,
            Score::NEG_INFINITY,
            Score::INFINITY,
            true,
            &StaticEvaluator,
            &mut stats,
        )
        .unwrap();
        assert!(score > stand_pat + 5.0, "{score} vs {stand_pat}");
        assert_eq!(game, before);
    }

    #[test]
    fn test_stand_pat_fail_high() {
        let mut game = TreeGame::new(3, 3);
        game.capture_from = 0;
        let stand_pat = PathEvaluator.evaluate(&game);
        let mut stats = SearchStats::default();
        let score = quiescence(&mut game, stand_pat - 20.0, stand_pat - 1.0, true, &PathEvaluator, &mut stats).unwrap();
        assert_eq!(score, stand_pat);
        assert_eq!(stats.nodes, 1);
    }

    #[test]
    fn test_stand_pat_fail_low_for_minimizer() {
        // The minimizer already has a score at or below alpha, so no capture is tried
        let mut game = TreeGame::new(3, 3);
        game.capture_from = 0;
        let before = game.clone();
        let stand_pat = PathEvaluator.evaluate(&game);
        let mut stats = SearchStats::default();
        let score = quiescence(&mut game, stand_pat + 1.0, stand_pat + 20.0, false, &PathEvaluator, &mut stats).unwrap();
        assert_eq!(score, stand_pat);
        assert_eq!(stats.nodes, 1);
        assert_eq!(stats.cutoffs, 1);
        assert_eq!(game, before);
    }
}
