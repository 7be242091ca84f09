//! MCTS configuration parameters.

use crate::error::{ChessEngineError, ChessEngineResult};
use serde::{Deserialize, Serialize};

/// MCTS hyperparameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MctsConfig {
    /// UCT exploration constant
    pub exploration: f64,
    /// Maximum plies played in one rollout before falling back to the evaluator
    pub rollout_plies: u32,
    /// Probability of playing a capture during a rollout when one exists
    pub capture_bias: f64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            exploration: 1.41,
            rollout_plies: 20,
            capture_bias: 0.5,
        }
    }
}

impl MctsConfig {
    /// Check the parameters before a search uses them
    pub fn validate(&self) -> ChessEngineResult<()> {
        if !self.exploration.is_finite() || self.exploration < 0.0 {
            return Err(ChessEngineError::InvalidConfig {
                reason: format!("exploration must be a non-negative number, got {}", self.exploration),
            });
        }
        if !(0.0..=1.0).contains(&self.capture_bias) {
            return Err(ChessEngineError::InvalidConfig {
                reason: format!("capture_bias must lie in [0, 1], got {}", self.capture_bias),
            });
        }
        Ok(())
    }
}
