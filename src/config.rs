//! Search configuration persistence
//!
//! Loads and saves [`SearchConfig`] as JSON. Every field is optional in the file; missing
//! fields take the engine defaults (minimax depth 3, alpha-beta depth 4, iterative
//! deepening depth 4, 300 MCTS simulations).
//!
//! ```json
//! { "alphabeta_depth": 3, "mcts": { "rollout_plies": 30 } }
//! ```

use crate::error::ConfigResult;
use chess_engine::SearchConfig;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Load and validate a search configuration from a JSON file
pub fn load_config(path: &Path) -> ConfigResult<SearchConfig> {
    let contents = fs::read_to_string(path)?;
    let config: SearchConfig = serde_json::from_str(&contents)?;
    config.validate()?;
    info!("[CONFIG] Loaded search configuration from {:?}", path);
    debug!(?config, "search configuration");
    Ok(config)
}

/// Load `path` if given, otherwise fall back to the defaults
pub fn load_or_default(path: Option<&Path>) -> ConfigResult<SearchConfig> {
    match path {
        Some(path) => load_config(path),
        None => {
            debug!("[CONFIG] No configuration file given. Using defaults.");
            Ok(SearchConfig::default())
        }
    }
}

/// Write any serializable value as pretty JSON, creating parent directories as needed
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> ConfigResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    info!("[CONFIG] Wrote {:?}", path);
    Ok(())
}

/// Save a search configuration as pretty JSON
pub fn save_config(path: &Path, config: &SearchConfig) -> ConfigResult<()> {
    save_json(path, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use chess_engine::{ChessEngineError, Strategy};

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("search.json");
        let config = SearchConfig::default().with_limit(Strategy::AlphaBeta, 2);

        save_config(&path, &config).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_takes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("search.json");
        fs::write(&path, r#"{ "mcts_simulations": 40, "mcts": { "capture_bias": 0.9 } }"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.mcts_simulations, 40);
        assert_eq!(config.mcts.capture_bias, 0.9);
        assert_eq!(config.minimax_depth, SearchConfig::default().minimax_depth);
        assert_eq!(config.mcts.exploration, SearchConfig::default().mcts.exploration);
    }

    #[test]
    fn test_errors_are_classified() {
        let dir = tempfile::tempdir().unwrap();

        let missing = load_config(&dir.path().join("absent.json"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));

        let garbled = dir.path().join("garbled.json");
        fs::write(&garbled, "{ not json").unwrap();
        assert!(matches!(load_config(&garbled), Err(ConfigError::Serialization(_))));

        let invalid = dir.path().join("invalid.json");
        fs::write(&invalid, r#"{ "iddfs_depth": 0 }"#).unwrap();
        assert!(matches!(
            load_config(&invalid),
            Err(ConfigError::Invalid(ChessEngineError::InvalidDepth { depth: 0 }))
        ));
    }

    #[test]
    fn test_no_path_means_defaults() {
        assert_eq!(load_or_default(None).unwrap(), SearchConfig::default());
    }
}
