//! Configuration error type.
//!
//! The simulation itself never fails mid-frame (it clamps or no-ops instead);
//! only loading and validating a `GameConfig` can produce an error.

use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    Parse(serde_json::Error),
    /// A value is outside the range the simulation can run with.
    Invalid {
        /// Dotted path of the offending field, e.g. `"gauge.max"`.
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "failed to parse game config: {e}"),
            ConfigError::Invalid {
                field,
                value,
                reason,
            } => write!(f, "invalid config value {field} = {value}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
