//! Undoable commands.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

type Action = Box<dyn Fn()>;

/// A forward action paired with its exact inverse.
///
/// Both closures are fixed at creation time; undo and redo replay them
/// rather than recomputing anything, so round-trips are exact. The metadata
/// usually holds the snapshots the closures move between.
///
/// # Example
///
/// ```rust
/// use widget_engine::history::Command;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let value = Rc::new(Cell::new(1));
/// let (fwd, inv) = (Rc::clone(&value), Rc::clone(&value));
///
/// let command = Command::new(move || fwd.set(2), move || inv.set(1), "1 -> 2");
///
/// command.execute();
/// assert_eq!(value.get(), 2);
/// command.undo();
/// assert_eq!(value.get(), 1);
/// ```
pub struct Command<M> {
    id: Uuid,
    created_at: DateTime<Utc>,
    forward: Action,
    inverse: Action,
    metadata: M,
}

impl<M> Command<M> {
    pub fn new<F, I>(forward: F, inverse: I, metadata: M) -> Self
    where
        F: Fn() + 'static,
        I: Fn() + 'static,
    {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            forward: Box::new(forward),
            inverse: Box::new(inverse),
            metadata,
        }
    }

    /// Run the forward action.
    pub fn execute(&self) {
        (self.forward)();
    }

    /// Run the inverse action.
    pub fn undo(&self) {
        (self.inverse)();
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn metadata(&self) -> &M {
        &self.metadata
    }
}

impl<M: fmt::Debug> fmt::Debug for Command<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("id", &self.id)
            .field("created_at", &self.created_at)
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

/// Metadata recorded for a data-state change.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StateChange<S> {
    pub previous: S,
    pub next: S,
}
