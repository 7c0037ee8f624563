use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML from '{path}': {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Line {line}: invalid value '{value}' for parameter '{key}' (expected {expected})")]
    InvalidValue {
        line: usize,
        key: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Line {line}: parameter '{key}' has no value")]
    MissingValue { line: usize, key: &'static str },

    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid run setting '{setting}': {reason}")]
    InvalidSetting {
        setting: &'static str,
        reason: String,
    },
}
