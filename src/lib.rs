//! Widget Engine: interactive state for UI widgets
//!
//! Each widget instance is a [`Component`] that owns an immutable data
//! snapshot and a current visual state derived from it. Every change goes
//! through a reversible command, so undo and redo restore exact snapshots.
//! User actions are dispatched to pluggable interaction strategies, and
//! observers learn about changes through a synchronous event channel.
//!
//! # Core Concepts
//!
//! - **Snapshots**: widget data via the `WidgetState` trait and `BaseState`
//! - **Visual states**: named nodes selected by a priority chain of guards
//! - **History**: forward/inverse command pairs with a cursor
//! - **Strategies**: one handler per interaction type, replaceable per instance
//! - **Events**: `stateChanged`, `stateTransition`, `cssStateChanged`,
//!   `historyChanged` plus semantic events such as `toggled`
//!
//! # Example
//!
//! ```rust
//! use widget_engine::strategy::DISABLED_OR_LOADING;
//! use widget_engine::widgets::Toggle;
//! use widget_engine::Component;
//!
//! let toggle = Component::new(Toggle::default());
//!
//! assert!(toggle.toggle().handled);
//! assert!(toggle.is_checked());
//!
//! toggle.set_disabled(true);
//! assert_eq!(toggle.visual_state(), "disabled");
//!
//! let result = toggle.toggle();
//! assert!(result.prevented);
//! assert_eq!(result.reason.as_deref(), Some(DISABLED_OR_LOADING));
//!
//! toggle.undo();
//! toggle.undo();
//! assert!(!toggle.is_checked());
//!
//! let history = toggle.history();
//! assert_eq!(history.current_position, -1);
//! assert!(!history.can_undo);
//! assert!(history.can_redo);
//! ```

mod macros;

pub mod component;
pub mod config;
pub mod core;
pub mod events;
pub mod history;
pub mod strategy;
pub mod visual;
pub mod widgets;

// Re-export commonly used types
pub use component::{Component, WeakComponent, Widget};
pub use config::{ConfigError, EngineConfig};
pub use core::{BaseState, Checkable, EngineError, Guard, WidgetState};
pub use events::{ComponentEvent, EventChannel, Subscription};
pub use history::{Command, CommandHistory, HistoryInfo, StateChange};
pub use strategy::{InteractionResult, InteractionStrategy, StrategyTable};
pub use visual::{CssState, DerivationChain, VisualNode, VisualStateNode, VisualStateRegistry};
