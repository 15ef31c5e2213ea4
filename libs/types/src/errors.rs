//! Error types for the impact simulator
//!
//! Comprehensive error taxonomy using thiserror. Configuration problems are
//! the only failure a run can hit, and they are reported before step 0.

use thiserror::Error;

/// Top-level simulator error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::Io {
            message: err.to_string(),
        }
    }
}

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("n_steps must be positive")]
    NonPositiveSteps,

    #[error("n_levels must be positive")]
    NonPositiveLevels,

    #[error("tick_size must be positive and finite, got {value}")]
    InvalidTickSize { value: f64 },

    #[error("wall index {index} outside book of {n_levels} levels")]
    WallOutOfRange { index: usize, n_levels: usize },

    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
