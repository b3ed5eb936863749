//! Tri-state checkbox.
//!
//! Toggling always leaves the indeterminate state. While indeterminate the
//! checkbox projects an `indeterminate` visual state ranked just below error.

use crate::component::{Component, Widget};
use crate::core::{BaseState, Checkable};
use crate::strategy::{
    InteractionResult, KeyboardActivation, StrategyTable, ToggleStrategy, CLICK, KEYDOWN, TOGGLE,
};
use crate::visual::{DerivationChain, VisualStateNode, VisualStateRegistry, PRESSED};
use serde::Serialize;
use serde_json::Value;

pub const INDETERMINATE: &str = "indeterminate";

#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct CheckboxState {
    #[serde(flatten)]
    pub base: BaseState,
    pub checked: bool,
    pub indeterminate: bool,
}

crate::widget_state!(CheckboxState);

impl Checkable for CheckboxState {
    fn is_checked(&self) -> bool {
        self.checked
    }

    fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
        self.indeterminate = false;
    }
}

#[derive(Clone, Debug, Default)]
pub struct Checkbox {
    pub checked: bool,
    pub indeterminate: bool,
}

impl Widget for Checkbox {
    type State = CheckboxState;
    const TYPE_TAG: &'static str = "checkbox";

    fn initial_state(&self) -> CheckboxState {
        CheckboxState {
            base: BaseState::default(),
            checked: self.checked,
            indeterminate: self.indeterminate,
        }
    }

    fn register_visual_states(&self, registry: &mut VisualStateRegistry) {
        registry.register(VisualStateNode::new(INDETERMINATE).with_classes(["indeterminate", "mixed"]));
    }

    fn register_strategies(&self, strategies: &mut StrategyTable<Self>) {
        strategies.register(TOGGLE, ToggleStrategy);
        strategies.register(CLICK, ToggleStrategy);
        strategies.register(KEYDOWN, KeyboardActivation::new(TOGGLE).with_keys([" "]));
    }

    fn visual_priority(&self) -> DerivationChain<CheckboxState> {
        DerivationChain::standard().insert_before(PRESSED, INDETERMINATE, |s: &CheckboxState| {
            s.indeterminate
        })
    }
}

impl Component<Checkbox> {
    pub fn toggle(&self) -> InteractionResult {
        self.handle_interaction(TOGGLE, Value::Null)
    }

    pub fn set_indeterminate(&self, indeterminate: bool) -> bool {
        self.set_state(|s| s.indeterminate = indeterminate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indeterminate_has_its_own_visual_state() {
        let checkbox = Component::new(Checkbox {
            checked: false,
            indeterminate: true,
        });

        assert_eq!(checkbox.visual_state(), INDETERMINATE);
        assert_eq!(
            checkbox.css_state().classes,
            vec!["component", "indeterminate", "mixed", "checkbox"]
        );
    }

    #[test]
    fn toggle_clears_indeterminate() {
        let checkbox = Component::new(Checkbox {
            checked: false,
            indeterminate: true,
        });

        checkbox.toggle();

        let state = checkbox.state();
        assert!(state.checked);
        assert!(!state.indeterminate);
        assert_eq!(checkbox.visual_state(), "idle");
    }

    #[test]
    fn error_outranks_indeterminate() {
        let checkbox = Component::new(Checkbox::default());
        checkbox.set_indeterminate(true);
        checkbox.set_error(Some("must accept".to_string()));
        assert_eq!(checkbox.visual_state(), "error");

        checkbox.undo();
        assert_eq!(checkbox.visual_state(), INDETERMINATE);
    }

    #[test]
    fn only_space_activates() {
        let checkbox = Component::new(Checkbox::default());
        assert!(!checkbox.keydown("Enter").handled);
        assert!(checkbox.keydown(" ").handled);
        assert!(checkbox.state().checked);
    }
}
