//! The extension point concrete widgets implement.

use crate::core::WidgetState;
use crate::strategy::StrategyTable;
use crate::visual::{DerivationChain, VisualStateRegistry};

/// Describes one kind of widget to the engine.
///
/// A [`Component`](super::Component) calls these hooks once, during
/// construction, in this order: [`initial_state`](Widget::initial_state),
/// [`register_visual_states`](Widget::register_visual_states) (after the
/// default nodes), [`register_strategies`](Widget::register_strategies)
/// (after the default strategies) and [`visual_priority`](Widget::visual_priority).
///
/// # Example
///
/// ```rust
/// use widget_engine::component::{Component, Widget};
/// use widget_engine::core::BaseState;
///
/// struct Badge;
///
/// impl Widget for Badge {
///     type State = BaseState;
///     const TYPE_TAG: &'static str = "badge";
///
///     fn initial_state(&self) -> BaseState {
///         BaseState::default()
///     }
/// }
///
/// let badge = Component::new(Badge);
/// assert_eq!(badge.visual_state(), "idle");
/// assert_eq!(badge.css_state().classes, vec!["component", "idle", "badge"]);
/// ```
pub trait Widget: Sized + 'static {
    type State: WidgetState;

    /// Last class of the projected class list.
    const TYPE_TAG: &'static str;

    fn initial_state(&self) -> Self::State;

    /// Add or replace visual-state nodes.
    fn register_visual_states(&self, _registry: &mut VisualStateRegistry) {}

    /// Add or replace interaction strategies.
    fn register_strategies(&self, _strategies: &mut StrategyTable<Self>) {}

    /// Priority order used to derive the current visual state.
    fn visual_priority(&self) -> DerivationChain<Self::State> {
        DerivationChain::standard()
    }
}
