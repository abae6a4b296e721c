//! Error types.
//!
//! Engine operations report failure as `false` and never error. Loading a
//! configuration is the only fallible surface.

use thiserror::Error;

/// Failure to load an `EngineConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse engine config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid engine config: {0}")]
    Invalid(String),
}
