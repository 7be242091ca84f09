//! Strategy selection and dispatch
//!
//! Engine callers pick a search by name and receive a move, plus a score for the
//! depth-first strategies.
//!
//! # Strategies
//!
//! | Name        | Search                         | Default limit     | Score |
//! |-------------|--------------------------------|-------------------|-------|
//! | `minimax`   | Exhaustive minimax             | depth 3           | yes   |
//! | `alphabeta` | Alpha-beta + quiescence        | depth 4           | yes   |
//! | `iddfs`     | Iterative deepening alpha-beta | depth 4           | yes   |
//! | `mcts`      | Monte Carlo Tree Search        | 300 simulations   | no    |
//! | `random`    | Uniformly random legal move    | -                 | no    |
//!
//! Limits live in [`SearchConfig`], which deserializes from JSON with every field
//! optional:
//!
//! ```rust,ignore
//! let config: SearchConfig = serde_json::from_str(r#"{ "alphabeta_depth": 3 }"#)?;
//! let choice = choose_move(&mut game, Strategy::AlphaBeta, &config, &mut rng)?;
//! game.play(choice.mv)?;
//! ```

use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::evaluation::StaticEvaluator;
use crate::game::Game;
use crate::mcts::{mcts, MctsConfig};
use crate::position::GamePosition;
use crate::search::{alpha_beta, iterative_deepening, minimax, random_move};
use crate::types::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Search strategy selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Minimax,
    #[serde(rename = "alphabeta")]
    AlphaBeta,
    #[serde(rename = "iddfs")]
    IterativeDeepening,
    Mcts,
    Random,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Minimax,
        Strategy::AlphaBeta,
        Strategy::IterativeDeepening,
        Strategy::Mcts,
        Strategy::Random,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alphabeta",
            Strategy::IterativeDeepening => "iddfs",
            Strategy::Mcts => "mcts",
            Strategy::Random => "random",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ChessEngineError;

    /// Case-insensitive lookup by name
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let lowered = name.trim().to_ascii_lowercase();
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == lowered)
            .ok_or_else(|| ChessEngineError::UnknownStrategy {
                name: name.to_string(),
            })
    }
}

/// Depth and simulation limits for every strategy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub minimax_depth: u32,
    pub alphabeta_depth: u32,
    pub iddfs_depth: u32,
    pub mcts_simulations: u32,
    pub mcts: MctsConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            minimax_depth: DEFAULT_MINIMAX_DEPTH,
            alphabeta_depth: DEFAULT_ALPHABETA_DEPTH,
            iddfs_depth: DEFAULT_IDDFS_DEPTH,
            mcts_simulations: DEFAULT_MCTS_SIMULATIONS,
            mcts: MctsConfig::default(),
        }
    }
}

impl SearchConfig {
    /// Same limits with the depth (or simulation count) of `strategy` replaced
    pub fn with_limit(mut self, strategy: Strategy, limit: u32) -> Self {
        match strategy {
            Strategy::Minimax => self.minimax_depth = limit,
            Strategy::AlphaBeta => self.alphabeta_depth = limit,
            Strategy::IterativeDeepening => self.iddfs_depth = limit,
            Strategy::Mcts => self.mcts_simulations = limit,
            Strategy::Random => {}
        }
        self
    }

    /// Reject limits under which a strategy could not produce a move
    pub fn validate(&self) -> ChessEngineResult<()> {
        for depth in [self.minimax_depth, self.alphabeta_depth, self.iddfs_depth] {
            if depth == 0 {
                return Err(ChessEngineError::InvalidDepth { depth });
            }
        }
        if self.mcts_simulations == 0 {
            return Err(ChessEngineError::InvalidSimulationCount);
        }
        self.mcts.validate()
    }
}

/// Move picked by a strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveChoice {
    pub mv: ChessMove,
    /// Search score from White's point of view, for depth-first strategies
    pub score: Option<Score>,
    pub strategy: Strategy,
}

/// Run `strategy` on `game` and return its move
///
/// The game is searched in place and restored before returning.
///
/// # Errors
///
/// - [`ChessEngineError::GameOver`] if the game has already ended
/// - [`ChessEngineError::NoMoveFound`] if a depth-first search returns no move
/// - Any error from the underlying search
pub fn choose_move<R>(
    game: &mut Game,
    strategy: Strategy,
    config: &SearchConfig,
    rng: &mut R,
) -> ChessEngineResult<MoveChoice>
where
    R: Rng + ?Sized,
{
    if game.is_terminal() {
        return Err(ChessEngineError::GameOver);
    }
    let maximizing = game.side_to_move() == Color::White;
    let evaluator = StaticEvaluator;

    let (mv, score) = match strategy {
        Strategy::Minimax => {
            let outcome = minimax(game, config.minimax_depth, maximizing, &evaluator)?;
            (outcome.best_move, Some(outcome.score))
        }
        Strategy::AlphaBeta => {
            let outcome = alpha_beta(
                game,
                config.alphabeta_depth,
                Score::NEG_INFINITY,
                Score::INFINITY,
                maximizing,
                &evaluator,
            )?;
            (outcome.best_move, Some(outcome.score))
        }
        Strategy::IterativeDeepening => {
            let outcome = iterative_deepening(game, config.iddfs_depth, &evaluator)?;
            (outcome.best_move, Some(outcome.score))
        }
        Strategy::Mcts => {
            let mv = mcts(game, config.mcts_simulations, &config.mcts, &evaluator, rng)?;
            (Some(mv), None)
        }
        Strategy::Random => (Some(random_move(game, rng)?), None),
    };

    let mv = mv.ok_or_else(|| ChessEngineError::NoMoveFound {
        strategy: strategy.to_string(),
    })?;
    debug!(%strategy, %mv, ?score, "move chosen");
    Ok(MoveChoice { mv, score, strategy })
}
