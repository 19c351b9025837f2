//! Search settings that can be stored in a TOML file, e.g.
//!
//! ```toml
//! engine = "astar"
//! heuristic = "nearest-residence"
//! time-limit = "30s"
//! memory-limit-mb = 4096
//! ```
//!
//! Every key is optional. Command line flags take precedence over the file.

use crate::search::{
    search_engines::TerminationCondition, HeuristicName, SearchEngineName, Verbosity,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid time limit {value:?}: {source}")]
    InvalidTimeLimit {
        value: String,
        source: humantime::DurationError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SearchConfig {
    #[serde(default = "SearchConfig::default_engine")]
    pub engine: SearchEngineName,
    #[serde(default = "SearchConfig::default_heuristic")]
    pub heuristic: HeuristicName,
    /// A human readable duration such as `"1m 30s"`.
    #[serde(default)]
    pub time_limit: Option<String>,
    #[serde(default)]
    pub memory_limit_mb: Option<usize>,
    #[serde(default)]
    pub expansion_limit: Option<usize>,
    #[serde(default)]
    pub verbosity: Verbosity,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engine: Self::default_engine(),
            heuristic: Self::default_heuristic(),
            time_limit: None,
            memory_limit_mb: None,
            expansion_limit: None,
            verbosity: Verbosity::default(),
        }
    }
}

impl SearchConfig {
    fn default_engine() -> SearchEngineName {
        SearchEngineName::Astar
    }

    fn default_heuristic() -> HeuristicName {
        HeuristicName::Zero
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    pub fn from_text(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn time_limit(&self) -> Result<Option<Duration>, ConfigError> {
        self.time_limit
            .as_deref()
            .map(|value| {
                humantime::parse_duration(value).map_err(|source| {
                    ConfigError::InvalidTimeLimit {
                        value: value.to_string(),
                        source,
                    }
                })
            })
            .transpose()
    }

    pub fn termination_condition(&self) -> Result<TerminationCondition, ConfigError> {
        Ok(TerminationCondition::new(
            self.time_limit()?,
            self.memory_limit_mb,
            self.expansion_limit,
        ))
    }
}
