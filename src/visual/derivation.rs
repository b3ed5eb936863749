//! Priority-ordered derivation of the visual state from a data snapshot.

use super::node::{DISABLED, ERROR, FOCUSED, HOVERED, IDLE, LOADING, PRESSED};
use crate::core::{Guard, WidgetState};
use std::fmt;

/// Ordered `(node name, guard)` pairs. The first passing guard wins; idle
/// is selected when none passes.
///
/// # Example
///
/// ```rust
/// use widget_engine::core::BaseState;
/// use widget_engine::visual::DerivationChain;
///
/// let chain: DerivationChain<BaseState> = DerivationChain::standard();
///
/// let state = BaseState { hovered: true, focused: true, ..BaseState::default() };
/// assert_eq!(chain.select(&state), "focused");
///
/// let state = BaseState { disabled: true, error: Some("bad".into()), ..state };
/// assert_eq!(chain.select(&state), "disabled");
///
/// assert_eq!(chain.select(&BaseState::default()), "idle");
/// ```
pub struct DerivationChain<S: WidgetState> {
    rules: Vec<(String, Guard<S>)>,
}

impl<S: WidgetState> DerivationChain<S> {
    /// Chain with no rules: always idle.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// disabled > loading > error > pressed > focused > hovered > idle
    pub fn standard() -> Self {
        Self::new()
            .rule(DISABLED, |s: &S| s.base().disabled)
            .rule(LOADING, |s: &S| s.base().loading)
            .rule(ERROR, |s: &S| s.base().has_error())
            .rule(PRESSED, |s: &S| s.base().pressed)
            .rule(FOCUSED, |s: &S| s.base().focused)
            .rule(HOVERED, |s: &S| s.base().hovered)
    }

    /// Append a rule with the lowest priority so far.
    pub fn rule<F>(self, node: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + 'static,
    {
        self.guarded(node, Guard::new(predicate))
    }

    pub fn guarded(mut self, node: impl Into<String>, guard: Guard<S>) -> Self {
        self.rules.push((node.into(), guard));
        self
    }

    /// Insert a rule directly before the rule for `before`, or at the end
    /// when `before` is not in the chain.
    pub fn insert_before<F>(mut self, before: &str, node: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + 'static,
    {
        let at = self
            .rules
            .iter()
            .position(|(name, _)| name == before)
            .unwrap_or(self.rules.len());
        self.rules.insert(at, (node.into(), Guard::new(predicate)));
        self
    }

    /// Name of the node the snapshot derives to.
    pub fn select(&self, state: &S) -> &str {
        self.rules
            .iter()
            .find(|(_, guard)| guard.check(state))
            .map_or(IDLE, |(name, _)| name.as_str())
    }

    /// Node names in priority order.
    pub fn order(&self) -> Vec<&str> {
        self.rules.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl<S: WidgetState> Default for DerivationChain<S> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<S: WidgetState> Clone for DerivationChain<S> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<S: WidgetState> fmt::Debug for DerivationChain<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivationChain")
            .field("order", &self.order())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BaseState;

    fn chain() -> DerivationChain<BaseState> {
        DerivationChain::standard()
    }

    #[test]
    fn empty_chain_falls_back_to_idle() {
        let chain: DerivationChain<BaseState> = DerivationChain::new();
        let state = BaseState {
            disabled: true,
            ..BaseState::default()
        };
        assert_eq!(chain.select(&state), IDLE);
    }

    #[test]
    fn disabled_outranks_everything() {
        let state = BaseState {
            disabled: true,
            hovered: true,
            focused: true,
            pressed: true,
            loading: true,
            error: Some("x".to_string()),
        };
        assert_eq!(chain().select(&state), DISABLED);
    }

    #[test]
    fn error_outranks_interaction_flags() {
        let state = BaseState {
            hovered: true,
            focused: true,
            pressed: true,
            error: Some("x".to_string()),
            ..BaseState::default()
        };
        assert_eq!(chain().select(&state), ERROR);
    }

    #[test]
    fn loading_outranks_error() {
        let state = BaseState {
            loading: true,
            error: Some("x".to_string()),
            ..BaseState::default()
        };
        assert_eq!(chain().select(&state), LOADING);
    }

    #[test]
    fn pressed_focused_hovered_order() {
        let mut state = BaseState {
            hovered: true,
            ..BaseState::default()
        };
        assert_eq!(chain().select(&state), HOVERED);
        state.focused = true;
        assert_eq!(chain().select(&state), FOCUSED);
        state.pressed = true;
        assert_eq!(chain().select(&state), PRESSED);
    }

    #[test]
    fn insert_before_ranks_custom_node() {
        let chain = chain().insert_before(PRESSED, "busy", |s: &BaseState| s.hovered && s.focused);
        assert_eq!(
            chain.order(),
            vec![DISABLED, LOADING, ERROR, "busy", PRESSED, FOCUSED, HOVERED]
        );

        let state = BaseState {
            hovered: true,
            focused: true,
            pressed: true,
            ..BaseState::default()
        };
        assert_eq!(chain.select(&state), "busy");
    }

    #[test]
    fn insert_before_unknown_appends() {
        let chain = chain().insert_before("missing", "last", |_: &BaseState| true);
        assert_eq!(chain.order().last(), Some(&"last"));
    }
}
