//! Monte Carlo Tree Search
//!
//! A statistical alternative to the depth-first searches. Each simulation:
//! 1. **Selection** - descend fully expanded nodes by UCT
//! 2. **Expansion** - pop one untried move and add the child
//! 3. **Simulation** - biased random rollout from the child, scored for the root player
//! 4. **Backup** - add the result to every node on the path
//!
//! The root child with the most visits is returned. Randomness comes from the caller's
//! RNG, so a seeded RNG reproduces a search exactly.
//!
//! ## Module Organization
//!
//! - `config` - Hyperparameters
//! - `node` - Arena node
//! - `tree` - Arena tree and the simulation cycle
//! - `rollout` - Playouts

mod config;
mod node;
mod rollout;
mod tree;

pub use config::MctsConfig;
pub use node::MctsNode;
pub use rollout::{simulate, EVAL_CLAMP, MATE_REWARD};
pub use tree::{ChildStats, MctsTree};

use crate::error::{ChessEngineError, ChessEngineResult};
use crate::evaluation::Evaluator;
use crate::position::GamePosition;
use rand::Rng;
use tracing::debug;

/// Choose a move by running `simulations` MCTS cycles from `position`
///
/// # Errors
///
/// - [`ChessEngineError::InvalidSimulationCount`] when `simulations` is 0
/// - [`ChessEngineError::NoLegalMoves`] when the root has no legal move
/// - [`ChessEngineError::InvalidConfig`] for out-of-range parameters
pub fn mcts<P, E, R>(
    position: &P,
    simulations: u32,
    config: &MctsConfig,
    evaluator: &E,
    rng: &mut R,
) -> ChessEngineResult<P::Move>
where
    P: GamePosition,
    E: Evaluator<P>,
    R: Rng + ?Sized,
{
    if simulations == 0 {
        return Err(ChessEngineError::InvalidSimulationCount);
    }
    config.validate()?;
    if position.legal_moves().is_empty() {
        return Err(ChessEngineError::NoLegalMoves);
    }

    let mut tree = MctsTree::new(position);
    tree.run(simulations, config, evaluator, rng);

    let best = tree.best_move()?;
    debug!(
        simulations,
        nodes = tree.len(),
        best = ?best,
        "mcts complete"
    );
    Ok(best)
}
