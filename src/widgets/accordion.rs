//! Collapsible sections.

use crate::component::{Component, Widget};
use crate::core::BaseState;
use crate::strategy::payload::{reject, str_field};
use crate::strategy::{InteractionResult, InteractionStrategy, StrategyTable, DISABLED_OR_LOADING};
use serde::Serialize;
use serde_json::{json, Value};

pub const TOGGLE_ITEM: &str = "toggleItem";
pub const ITEM_TOGGLED: &str = "itemToggled";

#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct AccordionState {
    #[serde(flatten)]
    pub base: BaseState,
    pub items: Vec<String>,
    pub expanded: Vec<String>,
    pub allow_multiple: bool,
}

crate::widget_state!(AccordionState);

#[derive(Clone, Debug, Default)]
pub struct Accordion {
    pub items: Vec<String>,
    pub expanded: Vec<String>,
    pub allow_multiple: bool,
}

impl Accordion {
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn allow_multiple(mut self) -> Self {
        self.allow_multiple = true;
        self
    }
}

impl Widget for Accordion {
    type State = AccordionState;
    const TYPE_TAG: &'static str = "accordion";

    fn initial_state(&self) -> AccordionState {
        let mut expanded: Vec<String> = self
            .expanded
            .iter()
            .filter(|id| self.items.contains(id))
            .cloned()
            .collect();
        if !self.allow_multiple {
            expanded.truncate(1);
        }
        AccordionState {
            base: BaseState::default(),
            items: self.items.clone(),
            expanded,
            allow_multiple: self.allow_multiple,
        }
    }

    fn register_strategies(&self, strategies: &mut StrategyTable<Self>) {
        strategies.register(TOGGLE_ITEM, ToggleItemStrategy);
    }
}

/// Expands or collapses one item. In single mode expanding an item
/// collapses the others.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToggleItemStrategy;

impl InteractionStrategy<Accordion> for ToggleItemStrategy {
    fn handle(&self, component: &Component<Accordion>, payload: &Value) -> InteractionResult {
        let state = component.state();
        if state.base.is_inert() {
            return InteractionResult::prevented(DISABLED_OR_LOADING);
        }

        let id = match str_field(TOGGLE_ITEM, payload, "id") {
            Ok(id) => id,
            Err(err) => return reject(&err),
        };
        if !state.items.iter().any(|item| item == id) {
            return InteractionResult::prevented("unknown item");
        }

        let expand = !state.expanded.iter().any(|item| item == id);
        let changed = component.set_state(|s| {
            if !expand {
                s.expanded.retain(|item| item != id);
            } else if s.allow_multiple {
                s.expanded.push(id.to_string());
            } else {
                s.expanded = vec![id.to_string()];
            }
        });
        if changed {
            component.emit(ITEM_TOGGLED, json!({ "id": id, "expanded": expand }));
        }
        InteractionResult::handled()
    }
}

impl Component<Accordion> {
    pub fn toggle_item(&self, id: &str) -> InteractionResult {
        self.handle_interaction(TOGGLE_ITEM, json!({ "id": id }))
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.state().expanded.iter().any(|item| item == id)
    }
}
