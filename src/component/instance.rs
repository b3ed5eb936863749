//! The component core: owns the snapshot, visual state, strategies and
//! history of one widget instance.

use super::widget::Widget;
use crate::config::EngineConfig;
use crate::core::{BaseState, EngineError, WidgetState};
use crate::events::{
    ComponentEvent, EventChannel, Subscription, CSS_STATE_CHANGED, HISTORY_CHANGED,
    STATE_CHANGED, STATE_TRANSITION,
};
use crate::history::{Command, CommandHistory, HistoryInfo, StateChange};
use crate::strategy::{
    InteractionResult, InteractionStrategy, StrategyTable, CLICK, FOCUS, HOVER, KEYDOWN,
    NO_STRATEGY, PRESS,
};
use crate::visual::{
    data_attributes, CssState, DerivationChain, VisualNode, VisualStateRegistry, IDLE,
};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type History<S> = CommandHistory<StateChange<S>>;

struct Inner<W: Widget> {
    widget: W,
    config: EngineConfig,
    state: RefCell<W::State>,
    registry: RefCell<VisualStateRegistry>,
    current: RefCell<Option<Rc<dyn VisualNode>>>,
    chain: DerivationChain<W::State>,
    strategies: RefCell<StrategyTable<W>>,
    history: RefCell<History<W::State>>,
    events: EventChannel<ComponentEvent<W::State>>,
}

/// Handle to a live widget instance.
///
/// Cloning the handle is cheap and every clone addresses the same instance.
/// All operations run synchronously on the caller's stack. Subscribers,
/// strategies, node hooks and commands may call back into the component:
/// no internal borrow is held while they run.
///
/// Subscribers that need the component should capture a
/// [`WeakComponent`] from [`downgrade`](Component::downgrade); a strong
/// handle inside a subscriber keeps the instance alive forever.
pub struct Component<W: Widget> {
    inner: Rc<Inner<W>>,
}

/// Non-owning handle, see [`Component::downgrade`].
pub struct WeakComponent<W: Widget> {
    inner: Weak<Inner<W>>,
}

impl<W: Widget> Component<W> {
    pub fn new(widget: W) -> Self {
        Self::with_config(widget, EngineConfig::default())
    }

    /// Construct with explicit settings.
    ///
    /// The initial snapshot comes first, then the default visual nodes and
    /// the widget's own, then the default strategies and the widget's own,
    /// and finally one derivation so the current visual state is set before
    /// this returns.
    pub fn with_config(widget: W, config: EngineConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                tracing::warn!(widget = W::TYPE_TAG, "{err}; falling back to defaults");
                EngineConfig::default()
            }
        };

        let state = widget.initial_state();

        let mut registry = VisualStateRegistry::with_defaults();
        widget.register_visual_states(&mut registry);

        let mut strategies = StrategyTable::with_defaults();
        widget.register_strategies(&mut strategies);

        let chain = widget.visual_priority();

        let history = match config.history_limit {
            Some(limit) => CommandHistory::with_limit(limit),
            None => CommandHistory::new(),
        };

        let component = Self {
            inner: Rc::new(Inner {
                widget,
                config,
                state: RefCell::new(state),
                registry: RefCell::new(registry),
                current: RefCell::new(None),
                chain,
                strategies: RefCell::new(strategies),
                history: RefCell::new(history),
                events: EventChannel::new(),
            }),
        };
        component.derive_visual_state();
        component
    }

    pub fn widget(&self) -> &W {
        &self.inner.widget
    }

    pub fn config(&self) -> &EngineConfig {
        &self.inner.config
    }

    /// Copy of the current snapshot.
    pub fn state(&self) -> W::State {
        self.inner.state.borrow().clone()
    }

    /// Name of the current visual-state node.
    pub fn visual_state(&self) -> String {
        self.inner
            .current
            .borrow()
            .as_ref()
            .map(|node| node.name().to_string())
            .unwrap_or_default()
    }

    /// `[base class, ...current node classes, type tag]` plus the snapshot's
    /// `data-*` attributes.
    pub fn css_state(&self) -> CssState {
        let mut classes = vec![self.inner.config.base_class.clone()];
        let current = self.inner.current.borrow().clone();
        if let Some(node) = current {
            classes.extend(node.css_classes());
        }
        classes.push(W::TYPE_TAG.to_string());

        CssState {
            classes,
            data_attributes: data_attributes(&*self.inner.state.borrow()),
        }
    }

    pub fn history(&self) -> HistoryInfo {
        self.inner.history.borrow().info()
    }

    /// Apply `update` to a copy of the snapshot and commit the result.
    ///
    /// Returns false, recording nothing and publishing nothing, when the
    /// updated copy equals the current snapshot.
    pub fn set_state<F>(&self, update: F) -> bool
    where
        F: FnOnce(&mut W::State),
    {
        let mut candidate = self.state();
        update(&mut candidate);
        self.replace_state(candidate)
    }

    /// Commit `candidate` as the new snapshot if it differs from the current
    /// one.
    pub fn replace_state(&self, candidate: W::State) -> bool {
        let previous = self.state();
        if candidate == previous {
            return false;
        }

        let command = self.state_command(previous, candidate);
        let command = self.inner.history.borrow_mut().record(command);
        tracing::trace!(widget = W::TYPE_TAG, command = %command.id(), "committing state change");
        command.execute();
        true
    }

    pub fn undo(&self) -> bool {
        let command = self.inner.history.borrow_mut().step_back();
        let Some(command) = command else {
            return false;
        };
        tracing::trace!(widget = W::TYPE_TAG, command = %command.id(), "undo");
        command.undo();
        self.publish_history();
        true
    }

    pub fn redo(&self) -> bool {
        let command = self.inner.history.borrow_mut().step_forward();
        let Some(command) = command else {
            return false;
        };
        tracing::trace!(widget = W::TYPE_TAG, command = %command.id(), "redo");
        command.execute();
        self.publish_history();
        true
    }

    /// Drop every recorded command. The snapshot is left as is.
    pub fn clear_history(&self) {
        self.inner.history.borrow_mut().clear();
        self.publish_history();
    }

    /// Changes recorded in the history, oldest first.
    pub fn recorded_changes(&self) -> Vec<StateChange<W::State>> {
        self.inner
            .history
            .borrow()
            .commands()
            .map(|command| command.metadata().clone())
            .collect()
    }

    /// Dispatch an interaction to the strategy registered for `kind`.
    ///
    /// Unknown kinds are logged and reported as unhandled.
    pub fn handle_interaction(&self, kind: &str, payload: Value) -> InteractionResult {
        let strategy = self.inner.strategies.borrow().get(kind);
        match strategy {
            Some(strategy) => strategy.handle(self, &payload),
            None => {
                let err = EngineError::NoStrategy {
                    kind: kind.to_string(),
                };
                tracing::warn!(widget = W::TYPE_TAG, "{err}");
                InteractionResult::unhandled(NO_STRATEGY)
            }
        }
    }

    /// Install or replace a strategy on this instance only.
    pub fn register_strategy<S>(&self, kind: impl Into<String>, strategy: S) -> bool
    where
        S: InteractionStrategy<W> + 'static,
    {
        self.inner.strategies.borrow_mut().register(kind, strategy)
    }

    pub fn has_strategy(&self, kind: &str) -> bool {
        self.inner.strategies.borrow().contains(kind)
    }

    /// Install or replace a visual-state node on this instance only. The
    /// node is picked up by the next derivation.
    pub fn register_visual_state<N: VisualNode + 'static>(&self, node: N) {
        self.inner.registry.borrow_mut().register(node);
    }

    pub fn subscribe<F>(
        &self,
        event: impl Into<String>,
        callback: F,
    ) -> Subscription<ComponentEvent<W::State>>
    where
        F: Fn(&ComponentEvent<W::State>) + 'static,
    {
        self.inner.events.subscribe(event, callback)
    }

    /// Publish a semantic event.
    pub fn emit(&self, event: &str, data: Value) {
        self.inner.events.notify(event, &ComponentEvent::Semantic(data));
    }

    pub fn downgrade(&self) -> WeakComponent<W> {
        WeakComponent {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn click(&self) -> InteractionResult {
        self.handle_interaction(CLICK, Value::Null)
    }

    pub fn hover(&self, hovered: bool) -> InteractionResult {
        self.handle_interaction(HOVER, Value::Bool(hovered))
    }

    pub fn focus(&self, focused: bool) -> InteractionResult {
        self.handle_interaction(FOCUS, Value::Bool(focused))
    }

    pub fn press(&self, pressed: bool) -> InteractionResult {
        self.handle_interaction(PRESS, Value::Bool(pressed))
    }

    pub fn keydown(&self, key: &str) -> InteractionResult {
        self.handle_interaction(KEYDOWN, json!({ "key": key }))
    }

    pub fn set_disabled(&self, disabled: bool) -> bool {
        self.update_base(|base| base.disabled = disabled)
    }

    pub fn set_loading(&self, loading: bool) -> bool {
        self.update_base(|base| base.loading = loading)
    }

    pub fn set_error(&self, error: Option<String>) -> bool {
        self.update_base(|base| base.error = error)
    }

    fn update_base<F: FnOnce(&mut BaseState)>(&self, update: F) -> bool {
        self.set_state(|s| update(s.base_mut()))
    }

    fn state_command(
        &self,
        previous: W::State,
        next: W::State,
    ) -> Command<StateChange<W::State>> {
        let forward = self.adopter(next.clone());
        let inverse = self.adopter(previous.clone());
        Command::new(forward, inverse, StateChange { previous, next })
    }

    fn adopter(&self, snapshot: W::State) -> impl Fn() + 'static {
        let target = self.downgrade();
        move || {
            if let Some(component) = target.upgrade() {
                component.adopt(snapshot.clone());
            }
        }
    }

    /// Swap in `snapshot`, re-derive the visual state and publish it.
    fn adopt(&self, snapshot: W::State) {
        *self.inner.state.borrow_mut() = snapshot.clone();
        self.derive_visual_state();
        self.inner
            .events
            .notify(STATE_CHANGED, &ComponentEvent::StateChanged(snapshot));
    }

    fn derive_visual_state(&self) {
        let snapshot = self.state();
        let name = self.inner.chain.select(&snapshot).to_string();

        let target = self.inner.registry.borrow().try_get(&name).cloned();
        let target = match target {
            Ok(target) => target,
            Err(err) if self.inner.current.borrow().is_some() => {
                tracing::warn!(widget = W::TYPE_TAG, "{err}; keeping current");
                return;
            }
            Err(err) => {
                tracing::warn!(widget = W::TYPE_TAG, "{err}; falling back to {IDLE}");
                let idle = self.inner.registry.borrow().get(IDLE).cloned();
                match idle {
                    Some(idle) => idle,
                    None => return,
                }
            }
        };

        let previous = self.inner.current.borrow().clone();
        if previous
            .as_ref()
            .is_some_and(|node| Rc::ptr_eq(node, &target))
        {
            return;
        }

        *self.inner.current.borrow_mut() = Some(Rc::clone(&target));
        if let Some(node) = &previous {
            node.exit();
        }
        target.enter();

        let from = previous.map(|node| node.name().to_string());
        tracing::debug!(
            widget = W::TYPE_TAG,
            from = ?from,
            to = target.name(),
            "visual state transition"
        );

        self.inner.events.notify(
            STATE_TRANSITION,
            &ComponentEvent::StateTransition {
                from,
                to: target.name().to_string(),
                state: snapshot,
            },
        );

        // A re-entrant commit may have moved the node and published its own projection.
        let moved = !self
            .inner
            .current
            .borrow()
            .as_ref()
            .is_some_and(|node| Rc::ptr_eq(node, &target));
        if moved {
            return;
        }
        self.inner
            .events
            .notify(CSS_STATE_CHANGED, &ComponentEvent::CssStateChanged(self.css_state()));
    }

    fn publish_history(&self) {
        let info = self.history();
        self.inner
            .events
            .notify(HISTORY_CHANGED, &ComponentEvent::HistoryChanged(info));
    }
}

impl<W: Widget> Clone for Component<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<W: Widget> fmt::Debug for Component<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("type", &W::TYPE_TAG)
            .field("state", &*self.inner.state.borrow())
            .field("visual_state", &self.visual_state())
            .field("history", &self.history())
            .finish()
    }
}

impl<W: Widget> WeakComponent<W> {
    pub fn upgrade(&self) -> Option<Component<W>> {
        self.inner.upgrade().map(|inner| Component { inner })
    }
}

impl<W: Widget> Clone for WeakComponent<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<W: Widget> fmt::Debug for WeakComponent<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakComponent")
            .field("type", &W::TYPE_TAG)
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}
