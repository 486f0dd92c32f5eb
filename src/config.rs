use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Limits applied by the validator and the interpreter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// Longest accepted program, in characters. Default: 32, which keeps brute-force
    /// searches over the maze out of reach.
    pub max_source_len: usize,
    /// Instructions executed before a run is cut off. Default: 10000.
    pub step_limit: usize,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            max_source_len: 32,
            step_limit: 10_000,
        }
    }
}

impl LanguageConfig {
    /// Loads a config from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        if config.step_limit == 0 {
            return Err(ConfigError::Invalid("step_limit must be at least 1".into()));
        }
        Ok(config)
    }
}
