//! Random playouts with a capture bias

use super::config::MctsConfig;
use crate::evaluation::Evaluator;
use crate::position::GamePosition;
use crate::types::Color;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Reward for a rollout that ends in mate
pub const MATE_REWARD: f64 = 10.0;
/// Evaluator scores are clamped to this magnitude before rescaling to `[-1, 1]`
pub const EVAL_CLAMP: f64 = 2.0;

/// Play a rollout on a private copy and score it for `root_color`
///
/// Mate scores [`MATE_REWARD`] for the winner, any other finished game scores 0, and an
/// unfinished rollout falls back to the clamped static evaluation.
pub fn simulate<P, E, R>(
    mut position: P,
    root_color: Color,
    config: &MctsConfig,
    evaluator: &E,
    rng: &mut R,
) -> f64
where
    P: GamePosition,
    E: Evaluator<P>,
    R: Rng + ?Sized,
{
    for _ in 0..config.rollout_plies {
        if position.is_terminal() {
            break;
        }
        let moves = position.legal_moves();
        let captures: Vec<P::Move> = moves.iter().copied().filter(|&mv| position.is_capture(mv)).collect();

        let pool = if !captures.is_empty() && rng.random_bool(config.capture_bias) {
            &captures
        } else {
            &moves
        };
        let Some(&mv) = pool.choose(rng) else {
            break;
        };
        position.apply(mv);
    }

    if position.is_checkmate() {
        let winner = position.side_to_move().opposite();
        return if winner == root_color { MATE_REWARD } else { -MATE_REWARD };
    }
    if position.is_terminal() {
        return 0.0;
    }

    let score = evaluator.evaluate(&position).clamp(-EVAL_CLAMP, EVAL_CLAMP) / EVAL_CLAMP;
    score * root_color.score_sign()
}
