//! Single selection among a fixed list of options.

use crate::component::{Component, Widget};
use crate::core::BaseState;
use crate::strategy::payload::{reject, str_field};
use crate::strategy::{
    InteractionResult, InteractionStrategy, StrategyTable, DISABLED_OR_LOADING, KEYDOWN,
};
use serde::Serialize;
use serde_json::{json, Value};

pub const SELECT: &str = "select";
pub const SELECTION_CHANGED: &str = "selectionChanged";

#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct RadioGroupState {
    #[serde(flatten)]
    pub base: BaseState,
    pub options: Vec<String>,
    pub selected: Option<String>,
}

crate::widget_state!(RadioGroupState);

impl RadioGroupState {
    fn selected_index(&self) -> Option<usize> {
        let selected = self.selected.as_deref()?;
        self.options.iter().position(|o| o == selected)
    }
}

#[derive(Clone, Debug, Default)]
pub struct RadioGroup {
    pub options: Vec<String>,
    pub selected: Option<String>,
}

impl RadioGroup {
    pub fn new<I, O>(options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            selected: None,
        }
    }
}

impl Widget for RadioGroup {
    type State = RadioGroupState;
    const TYPE_TAG: &'static str = "radio-group";

    fn initial_state(&self) -> RadioGroupState {
        let selected = self
            .selected
            .clone()
            .filter(|value| self.options.contains(value));
        RadioGroupState {
            base: BaseState::default(),
            options: self.options.clone(),
            selected,
        }
    }

    fn register_strategies(&self, strategies: &mut StrategyTable<Self>) {
        strategies.register(SELECT, SelectStrategy);
        strategies.register(KEYDOWN, RovingSelection);
    }
}

/// Selects one option by value.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectStrategy;

impl InteractionStrategy<RadioGroup> for SelectStrategy {
    fn handle(&self, component: &Component<RadioGroup>, payload: &Value) -> InteractionResult {
        let state = component.state();
        if state.base.is_inert() {
            return InteractionResult::prevented(DISABLED_OR_LOADING);
        }

        let value = match str_field(SELECT, payload, "value") {
            Ok(value) => value,
            Err(err) => return reject(&err),
        };
        if !state.options.iter().any(|o| o == value) {
            return InteractionResult::prevented("unknown option");
        }

        if component.set_state(|s| s.selected = Some(value.to_string())) {
            component.emit(
                SELECTION_CHANGED,
                json!({ "value": value, "previous": state.selected }),
            );
        }
        InteractionResult::handled()
    }
}

/// Arrow keys move the selection, wrapping at either end.
#[derive(Clone, Copy, Debug, Default)]
pub struct RovingSelection;

impl InteractionStrategy<RadioGroup> for RovingSelection {
    fn handle(&self, component: &Component<RadioGroup>, payload: &Value) -> InteractionResult {
        let key = match str_field(KEYDOWN, payload, "key") {
            Ok(key) => key,
            Err(err) => return reject(&err),
        };

        let state = component.state();
        let count = state.options.len();
        if count == 0 {
            return InteractionResult::unhandled("no options");
        }

        let index = match (key, state.selected_index()) {
            ("ArrowDown" | "ArrowRight", Some(i)) => (i + 1) % count,
            ("ArrowUp" | "ArrowLeft", Some(i)) => (i + count - 1) % count,
            ("ArrowDown" | "ArrowRight", None) => 0,
            ("ArrowUp" | "ArrowLeft", None) => count - 1,
            _ => return InteractionResult::unhandled("unhandled key"),
        };
        component.handle_interaction(SELECT, json!({ "value": state.options[index] }))
    }
}

impl Component<RadioGroup> {
    pub fn select(&self, value: &str) -> InteractionResult {
        self.handle_interaction(SELECT, json!({ "value": value }))
    }

    pub fn selected(&self) -> Option<String> {
        self.state().selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes() -> Component<RadioGroup> {
        Component::new(RadioGroup::new(["s", "m", "l"]))
    }

    #[test]
    fn select_known_option() {
        let group = sizes();
        assert!(group.select("m").handled);
        assert_eq!(group.selected().as_deref(), Some("m"));
        assert_eq!(group.css_state().attribute("data-selected"), Some("m"));
    }

    #[test]
    fn unknown_option_is_prevented() {
        let group = sizes();
        let result = group.select("xl");
        assert_eq!(result, InteractionResult::prevented("unknown option"));
        assert_eq!(group.selected(), None);
        assert_eq!(group.history().length, 0);
    }

    #[test]
    fn arrows_wrap_around() {
        let group = sizes();
        group.keydown("ArrowUp");
        assert_eq!(group.selected().as_deref(), Some("l"));
        group.keydown("ArrowDown");
        assert_eq!(group.selected().as_deref(), Some("s"));
        group.keydown("ArrowLeft");
        assert_eq!(group.selected().as_deref(), Some("l"));
    }

    #[test]
    fn initial_selection_must_be_an_option() {
        let group = Component::new(RadioGroup {
            options: vec!["a".to_string()],
            selected: Some("b".to_string()),
        });
        assert_eq!(group.selected(), None);
    }

    #[test]
    fn selection_event_carries_previous() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let group = sizes();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        group.subscribe(SELECTION_CHANGED, move |e| {
            if let Some(v) = e.semantic() {
                sink.borrow_mut().push(v.clone());
            }
        });

        group.select("s");
        group.select("l");

        assert_eq!(
            *seen.borrow(),
            vec![
                json!({"value": "s", "previous": null}),
                json!({"value": "l", "previous": "s"}),
            ]
        );
    }
}
