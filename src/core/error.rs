//! Engine usage errors.
//!
//! These never escape an action method: the component logs them and
//! degrades to a no-op. They are returned directly by the fallible lookup
//! and parsing helpers.

use thiserror::Error;

/// Errors caused by misconfiguring or misusing a component
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    #[error("No strategy registered for interaction '{kind}'")]
    NoStrategy { kind: String },

    #[error("Visual state '{name}' is not registered")]
    UnknownVisualState { name: String },

    #[error("Invalid payload for '{kind}': expected {expected}")]
    InvalidPayload { kind: String, expected: String },
}

impl EngineError {
    pub(crate) fn invalid_payload(kind: &str, expected: &str) -> Self {
        Self::InvalidPayload {
            kind: kind.to_string(),
            expected: expected.to_string(),
        }
    }
}
