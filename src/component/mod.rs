//! The component core.
//!
//! [`Component`] composes the other modules: it owns the data snapshot, the
//! visual-state registry and current node, the strategy table, the command
//! history and the event channel of one widget instance. Concrete widgets
//! plug in through the [`Widget`] trait.

mod instance;
mod widget;

pub use instance::{Component, WeakComponent};
pub use widget::Widget;
