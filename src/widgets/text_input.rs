//! Single-line text input with required/max-length validation.

use crate::component::{Component, Widget};
use crate::core::BaseState;
use crate::strategy::payload::{reject, str_field};
use crate::strategy::{InteractionResult, InteractionStrategy, StrategyTable};
use serde::Serialize;
use serde_json::{json, Value};

pub const INPUT: &str = "input";
pub const VALUE_CHANGED: &str = "valueChanged";
pub const DISABLED_OR_READ_ONLY: &str = "disabled or read-only";
pub const REQUIRED: &str = "required";

#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct TextInputState {
    #[serde(flatten)]
    pub base: BaseState,
    pub value: String,
    pub read_only: bool,
    pub required: bool,
    pub max_length: Option<usize>,
}

crate::widget_state!(TextInputState);

#[derive(Clone, Debug, Default)]
pub struct TextInput {
    pub value: String,
    pub required: bool,
    pub read_only: bool,
    pub max_length: Option<usize>,
}

impl Widget for TextInput {
    type State = TextInputState;
    const TYPE_TAG: &'static str = "input";

    fn initial_state(&self) -> TextInputState {
        TextInputState {
            base: BaseState::default(),
            value: self.value.clone(),
            read_only: self.read_only,
            required: self.required,
            max_length: self.max_length,
        }
    }

    fn register_strategies(&self, strategies: &mut StrategyTable<Self>) {
        strategies.register(INPUT, TextInputStrategy);
    }
}

/// Replaces the value, truncated to `max_length` characters, and publishes
/// `valueChanged` with the old and new values.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextInputStrategy;

impl InteractionStrategy<TextInput> for TextInputStrategy {
    fn handle(&self, component: &Component<TextInput>, payload: &Value) -> InteractionResult {
        let state = component.state();
        if state.base.is_inert() || state.read_only {
            return InteractionResult::prevented(DISABLED_OR_READ_ONLY);
        }

        let raw = match str_field(INPUT, payload, "value") {
            Ok(raw) => raw,
            Err(err) => return reject(&err),
        };
        let next: String = match state.max_length {
            Some(max) => raw.chars().take(max).collect(),
            None => raw.to_string(),
        };

        let old = state.value;
        if component.set_state(|s| s.value = next.clone()) {
            component.emit(VALUE_CHANGED, json!({ "oldValue": old, "newValue": next }));
        }
        InteractionResult::handled()
    }
}

impl Component<TextInput> {
    pub fn input(&self, value: &str) -> InteractionResult {
        self.handle_interaction(INPUT, json!({ "value": value }))
    }

    pub fn clear(&self) -> InteractionResult {
        self.input("")
    }

    pub fn value(&self) -> String {
        self.state().value
    }

    /// Check the current value and record the outcome in the `error` field.
    /// Returns true when the value is valid.
    pub fn validate(&self) -> bool {
        let state = self.state();
        let error = validation_error(&state);
        let valid = error.is_none();
        self.set_error(error);
        valid
    }
}

fn validation_error(state: &TextInputState) -> Option<String> {
    if state.required && state.value.trim().is_empty() {
        return Some(REQUIRED.to_string());
    }
    match state.max_length {
        Some(max) if state.value.chars().count() > max => Some(format!("longer than {max}")),
        _ => None,
    }
}
