//! Undo/redo support.
//!
//! Every committed data-state change becomes a [`Command`] holding a forward
//! action and its exact inverse. [`CommandHistory`] keeps them in order with
//! a cursor marking the last applied command.

mod command;
mod stack;

pub use command::{Command, StateChange};
pub use stack::{CommandHistory, HistoryInfo};
