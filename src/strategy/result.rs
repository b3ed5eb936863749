//! Outcome of dispatching an interaction.

use serde::{Deserialize, Serialize};

pub const DISABLED_OR_LOADING: &str = "disabled or loading";
pub const NO_STRATEGY: &str = "No strategy";
pub const INVALID_PAYLOAD: &str = "invalid payload";

/// What a strategy did with an interaction.
///
/// `prevented` means a guard refused the interaction and nothing changed.
/// `handled` is false when no strategy applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionResult {
    pub prevented: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default)]
    pub handled: bool,
}

impl InteractionResult {
    /// The strategy ran to completion.
    pub fn handled() -> Self {
        Self {
            prevented: false,
            reason: None,
            handled: true,
        }
    }

    /// A guard refused the interaction.
    pub fn prevented(reason: impl Into<String>) -> Self {
        Self {
            prevented: true,
            reason: Some(reason.into()),
            handled: false,
        }
    }

    /// Nothing applied, e.g. an unknown interaction type or key.
    pub fn unhandled(reason: impl Into<String>) -> Self {
        Self {
            prevented: false,
            reason: Some(reason.into()),
            handled: false,
        }
    }

    pub fn is_prevented(&self) -> bool {
        self.prevented
    }

    pub fn is_handled(&self) -> bool {
        self.handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_flags() {
        let ok = InteractionResult::handled();
        assert!(ok.is_handled() && !ok.is_prevented());
        assert!(ok.reason.is_none());

        let blocked = InteractionResult::prevented(DISABLED_OR_LOADING);
        assert!(blocked.is_prevented());
        assert_eq!(blocked.reason.as_deref(), Some("disabled or loading"));

        let missing = InteractionResult::unhandled(NO_STRATEGY);
        assert!(!missing.is_prevented() && !missing.is_handled());
    }

    #[test]
    fn serializes_with_camel_case_and_optional_reason() {
        let json = serde_json::to_value(InteractionResult::handled()).unwrap();
        assert_eq!(json, serde_json::json!({"prevented": false, "handled": true}));

        let json = serde_json::to_value(InteractionResult::prevented("disabled")).unwrap();
        assert_eq!(json["reason"], "disabled");
    }
}
