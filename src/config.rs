//! Solver settings loaded from a TOML file. Every key is optional; command
//! line flags take priority over anything set here.

use crate::search::{AstarCost, SearchEngine, Strategy};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid time limit {value:?}: {source}")]
    InvalidDuration {
        value: String,
        #[source]
        source: humantime::DurationError,
    },
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct SolverConfig {
    pub strategy: Strategy,
    pub seed: Option<u64>,
    pub astar_cost: AstarCost,
    pub expansion_limit: Option<usize>,
    /// Human readable duration such as `"30s"` or `"1m 30s"`.
    pub time_limit: Option<String>,
    pub memory_limit_mb: Option<usize>,
    pub show_explored: bool,
}

impl SolverConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&text)
    }

    pub fn from_text(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn time_limit(&self) -> Result<Option<Duration>, ConfigError> {
        self.time_limit
            .as_deref()
            .map(|value| {
                humantime::parse_duration(value).map_err(|source| ConfigError::InvalidDuration {
                    value: value.to_string(),
                    source,
                })
            })
            .transpose()
    }

    /// Build an engine from these settings. Without a configured seed the
    /// engine draws a random one.
    pub fn create_engine(&self) -> Result<SearchEngine, ConfigError> {
        let engine = match self.seed {
            Some(seed) => SearchEngine::with_seed(self.strategy, seed),
            None => SearchEngine::new(self.strategy),
        };
        Ok(engine
            .with_astar_cost(self.astar_cost)
            .with_expansion_limit(self.expansion_limit)
            .with_time_limit(self.time_limit()?)
            .with_memory_limit(self.memory_limit_mb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_config_uses_defaults() {
        let config = SolverConfig::from_text("").unwrap();
        assert_eq!(config, SolverConfig::default());
        assert_eq!(config.strategy, Strategy::Dfs);
        assert_eq!(config.time_limit().unwrap(), None);
    }

    #[test]
    fn reads_every_key() {
        let config = SolverConfig::from_text(
            r#"
            strategy = "astar"
            seed = 42
            astar-cost = "path-length"
            expansion-limit = 1000
            time-limit = "1m 30s"
            memory-limit-mb = 512
            show-explored = true
            "#,
        )
        .unwrap();
        assert_eq!(config.strategy, Strategy::Astar);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.astar_cost, AstarCost::PathLength);
        assert_eq!(config.expansion_limit, Some(1000));
        assert_eq!(config.time_limit().unwrap(), Some(Duration::from_secs(90)));
        assert_eq!(config.memory_limit_mb, Some(512));
        assert!(config.show_explored);

        let engine = config.create_engine().unwrap();
        assert_eq!(engine.strategy(), Strategy::Astar);
        assert_eq!(engine.seed(), 42);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            SolverConfig::from_text("strategy = \"ucs\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SolverConfig::from_text("colour = true"),
            Err(ConfigError::Parse(_))
        ));

        let config = SolverConfig::from_text("time-limit = \"soon\"").unwrap();
        assert!(matches!(
            config.time_limit(),
            Err(ConfigError::InvalidDuration { .. })
        ));
        assert!(config.create_engine().is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "strategy = \"bfs\"\nseed = 7").unwrap();
        let config = SolverConfig::from_path(file.path()).unwrap();
        assert_eq!(config.strategy, Strategy::Bfs);
        assert_eq!(config.seed, Some(7));

        assert!(matches!(
            SolverConfig::from_path(Path::new("does/not/exist.toml")),
            Err(ConfigError::Io { .. })
        ));
    }
}
