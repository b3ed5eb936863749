//! Per-component engine configuration.

use serde::{Deserialize, Serialize};

pub mod error;

pub use error::ConfigError;

/// Base marker class placed first in every projected class list.
pub const DEFAULT_BASE_CLASS: &str = "component";

/// Settings applied when a component is constructed.
///
/// # Example
///
/// ```rust
/// use widget_engine::config::EngineConfig;
///
/// let config = EngineConfig::from_json(r#"{ "historyLimit": 50 }"#).unwrap();
/// assert_eq!(config.history_limit, Some(50));
/// assert_eq!(config.base_class, "component");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct EngineConfig {
    /// First class of every projected class list
    pub base_class: String,

    /// Maximum number of commands kept for undo. `None` keeps every command
    /// for the component's lifetime.
    pub history_limit: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_class: DEFAULT_BASE_CLASS.to_string(),
            history_limit: None,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_base_class(mut self, base_class: impl Into<String>) -> Self {
        self.base_class = base_class.into();
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_class.trim().is_empty() {
            return Err(ConfigError::Invalid("baseClass must not be empty".to_string()));
        }
        if self.history_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "historyLimit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
