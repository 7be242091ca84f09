//! Search front end for the `chess_engine` crate
//!
//! - `config` - JSON search configuration
//! - `tournament` - AI-vs-AI match runner
//! - `cli` - The `xfsearch` command line

pub mod cli;
pub mod config;
pub mod error;
pub mod tournament;

pub use config::{load_config, load_or_default, save_config};
pub use error::{ConfigError, ConfigResult};
pub use tournament::{play_game, run_matchup, GameRecord, GameResult, MatchDrawReason, MatchReport, MatchSettings, MatchSummary};
