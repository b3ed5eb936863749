//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading an [`EngineConfig`](super::EngineConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input was not valid JSON for the config shape
    #[error("Failed to parse engine config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field held a value the engine cannot run with
    #[error("Invalid engine config: {0}")]
    Invalid(String),
}
