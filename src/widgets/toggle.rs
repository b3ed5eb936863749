//! Two-state switch.

use crate::component::{Component, Widget};
use crate::core::{BaseState, Checkable};
use crate::strategy::{
    InteractionResult, KeyboardActivation, StrategyTable, ToggleStrategy, CLICK, KEYDOWN, TOGGLE,
};
use serde::Serialize;
use serde_json::Value;

#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct ToggleState {
    #[serde(flatten)]
    pub base: BaseState,
    pub checked: bool,
}

crate::widget_state!(ToggleState);

impl Checkable for ToggleState {
    fn is_checked(&self) -> bool {
        self.checked
    }

    fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }
}

#[derive(Clone, Debug, Default)]
pub struct Toggle {
    pub checked: bool,
    pub disabled: bool,
}

impl Widget for Toggle {
    type State = ToggleState;
    const TYPE_TAG: &'static str = "toggle";

    fn initial_state(&self) -> ToggleState {
        ToggleState {
            base: BaseState {
                disabled: self.disabled,
                ..BaseState::default()
            },
            checked: self.checked,
        }
    }

    fn register_strategies(&self, strategies: &mut StrategyTable<Self>) {
        strategies.register(TOGGLE, ToggleStrategy);
        strategies.register(CLICK, ToggleStrategy);
        strategies.register(KEYDOWN, KeyboardActivation::new(TOGGLE));
    }
}

impl Component<Toggle> {
    pub fn toggle(&self) -> InteractionResult {
        self.handle_interaction(TOGGLE, Value::Null)
    }

    pub fn is_checked(&self) -> bool {
        self.state().checked
    }

    /// Direct setter; bypasses guards and publishes no `toggled` event.
    pub fn set_checked(&self, checked: bool) -> bool {
        self.set_state(|s| s.checked = checked)
    }
}
