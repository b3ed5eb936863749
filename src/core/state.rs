//! Data-state traits shared by every widget.
//!
//! A widget's data state is an immutable snapshot: the engine never mutates
//! the current snapshot in place, it clones, edits the clone and swaps it in.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Interaction fields common to every widget.
///
/// Concrete widget states embed this struct (usually flattened for
/// serialization) and expose it through [`WidgetState::base`].
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct BaseState {
    pub disabled: bool,
    pub hovered: bool,
    pub focused: bool,
    pub pressed: bool,
    pub loading: bool,
    /// Domain error, e.g. a failed validation. Flows through undo/redo
    /// like any other field.
    pub error: Option<String>,
}

impl BaseState {
    /// True when the widget should ignore activating interactions.
    pub fn is_inert(&self) -> bool {
        self.disabled || self.loading
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Trait for widget data-state snapshots.
///
/// # Required Traits
///
/// - `Clone`: snapshots are copied for every command and every `state()` call
/// - `PartialEq`: structural equality decides whether an update changed anything
/// - `Debug`: snapshots appear in diagnostics
/// - `Serialize`: the CSS projection derives data attributes from the snapshot
///
/// # Example
///
/// ```rust
/// use widget_engine::core::{BaseState, WidgetState};
/// use serde::Serialize;
///
/// #[derive(Clone, PartialEq, Debug, Default, Serialize)]
/// struct SwitchState {
///     #[serde(flatten)]
///     base: BaseState,
///     on: bool,
/// }
///
/// impl WidgetState for SwitchState {
///     fn base(&self) -> &BaseState {
///         &self.base
///     }
///
///     fn base_mut(&mut self) -> &mut BaseState {
///         &mut self.base
///     }
/// }
///
/// let state = SwitchState::default();
/// assert!(!state.base().is_inert());
/// ```
pub trait WidgetState: Clone + PartialEq + Debug + Serialize + 'static {
    /// Shared interaction fields.
    fn base(&self) -> &BaseState;

    /// Mutable access, only ever used on a candidate clone.
    fn base_mut(&mut self) -> &mut BaseState;
}

/// Capability for states that carry a checked flag.
///
/// Shared strategies bound on this trait instead of inspecting the
/// concrete widget type.
pub trait Checkable: WidgetState {
    fn is_checked(&self) -> bool;

    fn set_checked(&mut self, checked: bool);
}

impl WidgetState for BaseState {
    fn base(&self) -> &BaseState {
        self
    }

    fn base_mut(&mut self) -> &mut BaseState {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Default, Serialize)]
    struct TestState {
        #[serde(flatten)]
        base: BaseState,
        checked: bool,
    }

    impl WidgetState for TestState {
        fn base(&self) -> &BaseState {
            &self.base
        }

        fn base_mut(&mut self) -> &mut BaseState {
            &mut self.base
        }
    }

    impl Checkable for TestState {
        fn is_checked(&self) -> bool {
            self.checked
        }

        fn set_checked(&mut self, checked: bool) {
            self.checked = checked;
        }
    }

    #[test]
    fn inert_when_disabled_or_loading() {
        let mut base = BaseState::default();
        assert!(!base.is_inert());

        base.disabled = true;
        assert!(base.is_inert());

        base.disabled = false;
        base.loading = true;
        assert!(base.is_inert());
    }

    #[test]
    fn error_is_plain_data() {
        let mut base = BaseState::default();
        assert!(!base.has_error());
        base.error = Some("required".to_string());
        assert!(base.has_error());
    }

    #[test]
    fn structural_equality_ignores_identity() {
        let a = TestState::default();
        let mut b = a.clone();
        assert_eq!(a, b);

        b.set_checked(true);
        assert_ne!(a, b);
        b.set_checked(false);
        assert_eq!(a, b);
    }

    #[test]
    fn base_mut_edits_shared_fields() {
        let mut state = TestState::default();
        state.base_mut().hovered = true;
        assert!(state.base().hovered);
        assert!(!state.is_checked());
    }

    #[test]
    fn flattened_state_serializes_base_fields_at_top_level() {
        let state = TestState::default();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["disabled"], serde_json::Value::Bool(false));
        assert_eq!(json["checked"], serde_json::Value::Bool(false));
        assert!(json["error"].is_null());
    }
}
