//! Search configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tuning knobs for a [`SearchEngine`](super::SearchEngine).
///
/// Missing fields take their defaults, so an empty TOML document is a valid
/// configuration.
///
/// # Examples
///
/// ```
/// use u_tsp::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_progress_log_interval(1_000)
///     .with_thread_name("solver");
/// assert_eq!(config.progress_log_interval, 1_000);
/// assert_eq!(config.thread_name, "solver");
///
/// let parsed = SearchConfig::from_toml_str("progress_log_interval = 0").unwrap();
/// assert_eq!(parsed.progress_log_interval, 0);
/// assert_eq!(parsed.thread_name, "tsp-search");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SearchConfig {
    /// Emit a `search_progress` debug event every this many evaluated
    /// tours. Zero disables progress events.
    pub progress_log_interval: u64,
    /// Name given to the thread started by
    /// [`SearchHandle::spawn`](super::SearchHandle::spawn).
    pub thread_name: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            progress_log_interval: 100_000,
            thread_name: "tsp-search".to_string(),
        }
    }
}

impl SearchConfig {
    /// Sets the progress event interval.
    pub fn with_progress_log_interval(mut self, n: u64) -> Self {
        self.progress_log_interval = n;
        self
    }

    /// Sets the worker thread name.
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// Loads and validates configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that would otherwise fail later at thread spawn.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thread_name.is_empty() {
            return Err(ConfigError::Invalid("thread name is empty".into()));
        }
        if self.thread_name.contains('\0') {
            return Err(ConfigError::Invalid("thread name contains NUL".into()));
        }
        Ok(())
    }
}
