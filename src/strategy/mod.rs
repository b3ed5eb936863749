//! Interaction strategies.
//!
//! Every user-facing action on a component is funneled through a strategy
//! looked up by interaction type. Strategies follow one shape:
//! read the snapshot, check a guard, update state through the component,
//! and publish a semantic event only when the update changed something.

mod builtin;
pub mod payload;
mod result;

pub use builtin::{
    ClickStrategy, FocusStrategy, HoverStrategy, KeyboardActivation, PressStrategy, ToggleStrategy,
    CLICKED, FOCUS_CHANGED, HOVER_CHANGED, PRESS_CHANGED, TOGGLED,
};
pub use result::{InteractionResult, DISABLED_OR_LOADING, INVALID_PAYLOAD, NO_STRATEGY};

use crate::component::{Component, Widget};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

pub const CLICK: &str = "click";
pub const HOVER: &str = "hover";
pub const FOCUS: &str = "focus";
pub const PRESS: &str = "press";
pub const KEYDOWN: &str = "keydown";
pub const TOGGLE: &str = "toggle";

/// Handler for one interaction type.
///
/// Closures with the same signature are strategies too.
pub trait InteractionStrategy<W: Widget> {
    fn handle(&self, component: &Component<W>, payload: &Value) -> InteractionResult;
}

impl<W, F> InteractionStrategy<W> for F
where
    W: Widget,
    F: Fn(&Component<W>, &Value) -> InteractionResult,
{
    fn handle(&self, component: &Component<W>, payload: &Value) -> InteractionResult {
        self(component, payload)
    }
}

/// Interaction type → strategy, owned by one component.
pub struct StrategyTable<W: Widget> {
    strategies: HashMap<String, Rc<dyn InteractionStrategy<W>>>,
}

impl<W: Widget> StrategyTable<W> {
    pub fn new() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// Table holding the strategies every widget starts with: click, hover,
    /// focus, press, and keydown activating click.
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.register(CLICK, ClickStrategy);
        table.register(HOVER, HoverStrategy);
        table.register(FOCUS, FocusStrategy);
        table.register(PRESS, PressStrategy);
        table.register(KEYDOWN, KeyboardActivation::new(CLICK));
        table
    }

    /// Install `strategy` for `kind`, replacing any previous entry. Returns
    /// true when an entry was replaced.
    pub fn register<S>(&mut self, kind: impl Into<String>, strategy: S) -> bool
    where
        S: InteractionStrategy<W> + 'static,
    {
        self.strategies
            .insert(kind.into(), Rc::new(strategy))
            .is_some()
    }

    pub fn get(&self, kind: &str) -> Option<Rc<dyn InteractionStrategy<W>>> {
        self.strategies.get(kind).cloned()
    }

    pub fn remove(&mut self, kind: &str) -> bool {
        self.strategies.remove(kind).is_some()
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.strategies.contains_key(kind)
    }

    /// Registered interaction types, sorted.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.strategies.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }
}

impl<W: Widget> Default for StrategyTable<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Widget> fmt::Debug for StrategyTable<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyTable")
            .field("kinds", &self.kinds())
            .finish()
    }
}
