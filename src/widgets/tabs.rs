//! Tab list with one active tab.

use crate::component::{Component, Widget};
use crate::core::BaseState;
use crate::strategy::payload::{reject, str_field};
use crate::strategy::{
    InteractionResult, InteractionStrategy, StrategyTable, DISABLED_OR_LOADING, KEYDOWN,
};
use serde::Serialize;
use serde_json::{json, Value};

pub const ACTIVATE_TAB: &str = "activateTab";
pub const TAB_ACTIVATED: &str = "tabActivated";

#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct TabsState {
    #[serde(flatten)]
    pub base: BaseState,
    pub tabs: Vec<String>,
    pub disabled_tabs: Vec<String>,
    pub active: Option<String>,
}

crate::widget_state!(TabsState);

impl TabsState {
    fn is_enabled(&self, id: &str) -> bool {
        !self.disabled_tabs.iter().any(|t| t == id)
    }

    /// Next enabled tab from the active one in `direction` (+1 or -1),
    /// wrapping around.
    fn neighbour(&self, direction: isize) -> Option<&str> {
        let count = self.tabs.len() as isize;
        if count == 0 {
            return None;
        }
        let start = self
            .active
            .as_deref()
            .and_then(|active| self.tabs.iter().position(|t| t == active))
            .map_or(if direction > 0 { -1 } else { count }, |i| i as isize);

        (1..=count)
            .map(|offset| (start + direction * offset).rem_euclid(count) as usize)
            .map(|i| self.tabs[i].as_str())
            .find(|id| self.is_enabled(id))
    }

    fn first_enabled(&self) -> Option<&str> {
        self.tabs
            .iter()
            .map(String::as_str)
            .find(|id| self.is_enabled(id))
    }

    fn last_enabled(&self) -> Option<&str> {
        self.tabs
            .iter()
            .rev()
            .map(String::as_str)
            .find(|id| self.is_enabled(id))
    }
}

#[derive(Clone, Debug, Default)]
pub struct Tabs {
    pub tabs: Vec<String>,
    pub disabled_tabs: Vec<String>,
    pub active: Option<String>,
}

impl Tabs {
    pub fn new<I, T>(tabs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            tabs: tabs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_disabled<I, T>(mut self, tabs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.disabled_tabs = tabs.into_iter().map(Into::into).collect();
        self
    }
}

impl Widget for Tabs {
    type State = TabsState;
    const TYPE_TAG: &'static str = "tabs";

    fn initial_state(&self) -> TabsState {
        let mut state = TabsState {
            base: BaseState::default(),
            tabs: self.tabs.clone(),
            disabled_tabs: self.disabled_tabs.clone(),
            active: None,
        };
        state.active = self
            .active
            .clone()
            .filter(|id| state.tabs.contains(id) && state.is_enabled(id))
            .or_else(|| state.first_enabled().map(str::to_string));
        state
    }

    fn register_strategies(&self, strategies: &mut StrategyTable<Self>) {
        strategies.register(ACTIVATE_TAB, ActivateTabStrategy);
        strategies.register(KEYDOWN, TabKeys);
    }
}

/// Activates a tab by id. Unknown and disabled tabs are refused.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActivateTabStrategy;

impl InteractionStrategy<Tabs> for ActivateTabStrategy {
    fn handle(&self, component: &Component<Tabs>, payload: &Value) -> InteractionResult {
        let state = component.state();
        if state.base.is_inert() {
            return InteractionResult::prevented(DISABLED_OR_LOADING);
        }

        let id = match str_field(ACTIVATE_TAB, payload, "id") {
            Ok(id) => id,
            Err(err) => return reject(&err),
        };
        if !state.tabs.iter().any(|t| t == id) {
            return InteractionResult::prevented("unknown tab");
        }
        if !state.is_enabled(id) {
            return InteractionResult::prevented("tab disabled");
        }

        if component.set_state(|s| s.active = Some(id.to_string())) {
            component.emit(TAB_ACTIVATED, json!({ "id": id, "previous": state.active }));
        }
        InteractionResult::handled()
    }
}

/// Arrow keys move between enabled tabs; Home and End jump to the ends.
#[derive(Clone, Copy, Debug, Default)]
pub struct TabKeys;

impl InteractionStrategy<Tabs> for TabKeys {
    fn handle(&self, component: &Component<Tabs>, payload: &Value) -> InteractionResult {
        let key = match str_field(KEYDOWN, payload, "key") {
            Ok(key) => key,
            Err(err) => return reject(&err),
        };

        let state = component.state();
        let target = match key {
            "ArrowRight" => state.neighbour(1),
            "ArrowLeft" => state.neighbour(-1),
            "Home" => state.first_enabled(),
            "End" => state.last_enabled(),
            _ => return InteractionResult::unhandled("unhandled key"),
        };
        match target {
            Some(id) => component.handle_interaction(ACTIVATE_TAB, json!({ "id": id })),
            None => InteractionResult::unhandled("no enabled tab"),
        }
    }
}

impl Component<Tabs> {
    pub fn activate(&self, id: &str) -> InteractionResult {
        self.handle_interaction(ACTIVATE_TAB, json!({ "id": id }))
    }

    pub fn active_tab(&self) -> Option<String> {
        self.state().active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> Component<Tabs> {
        Component::new(Tabs::new(["general", "advanced", "about"]).with_disabled(["advanced"]))
    }

    #[test]
    fn first_enabled_tab_is_active_initially() {
        let tabs = Component::new(Tabs::new(["a", "b"]).with_disabled(["a"]));
        assert_eq!(tabs.active_tab().as_deref(), Some("b"));
    }

    #[test]
    fn disabled_tab_is_refused() {
        let tabs = tabs();
        let result = tabs.activate("advanced");
        assert_eq!(result, InteractionResult::prevented("tab disabled"));
        assert_eq!(tabs.active_tab().as_deref(), Some("general"));
    }

    #[test]
    fn unknown_tab_is_refused() {
        let tabs = tabs();
        assert_eq!(
            tabs.activate("missing"),
            InteractionResult::prevented("unknown tab")
        );
    }

    #[test]
    fn arrows_skip_disabled_tabs() {
        let tabs = tabs();
        tabs.keydown("ArrowRight");
        assert_eq!(tabs.active_tab().as_deref(), Some("about"));
        tabs.keydown("ArrowRight");
        assert_eq!(tabs.active_tab().as_deref(), Some("general"));
        tabs.keydown("ArrowLeft");
        assert_eq!(tabs.active_tab().as_deref(), Some("about"));
        tabs.keydown("Home");
        assert_eq!(tabs.active_tab().as_deref(), Some("general"));
        tabs.keydown("End");
        assert_eq!(tabs.active_tab().as_deref(), Some("about"));
    }

    #[test]
    fn tab_activated_carries_previous() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let tabs = tabs();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        tabs.subscribe(TAB_ACTIVATED, move |e| {
            if let Some(v) = e.semantic() {
                sink.borrow_mut().push(v.clone());
            }
        });

        tabs.activate("about");
        tabs.activate("about");

        assert_eq!(
            *seen.borrow(),
            vec![json!({"id": "about", "previous": "general"})]
        );
        assert_eq!(tabs.css_state().attribute("data-active"), Some("about"));
    }
}
