//! Core data-state types.
//!
//! This module contains the pieces every other module builds on:
//! - Snapshot traits via `WidgetState` and the shared `BaseState`
//! - Guard predicates over snapshots
//! - Usage errors
//!
//! Nothing in this module performs side effects.

mod error;
mod guard;
mod state;

pub use error::EngineError;
pub use guard::Guard;
pub use state::{BaseState, Checkable, WidgetState};
