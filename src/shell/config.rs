// Environment configuration for the registration command line.
//
// Responsibilities
// - Read the log filter and the optional request file from the environment.
// - Turn the log filter into a tracing `EnvFilter`.

use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Tracing filter directive, for example `user_registration=debug`.
pub const LOG_FILTER_VAR: &str = "USER_REGISTRATION_LOG";
/// Path of a JSON-lines request file.
pub const INPUT_VAR: &str = "USER_REGISTRATION_INPUT";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid log filter {directive:?}: {source}")]
    InvalidLogFilter {
        directive: String,
        #[source]
        source: ParseError,
    },
}

/// Settings for one run of the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub log_filter: String,
    /// JSON-lines request file; stdin when `None`.
    pub input: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            input: None,
        }
    }
}

impl ShellConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        Self {
            log_filter: non_blank(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            input: non_blank(INPUT_VAR).map(PathBuf::from),
        }
    }

    /// Fails when the configured directive does not parse.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log_filter).map_err(|source| ConfigError::InvalidLogFilter {
            directive: self.log_filter.clone(),
            source,
        })
    }
}
