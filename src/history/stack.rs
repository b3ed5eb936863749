//! Cursor-based command history.

use super::command::Command;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Summary of a history's position.
///
/// `current_position` is the index of the last applied command, or `-1`
/// when nothing is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryInfo {
    pub length: usize,
    pub current_position: isize,
    pub can_undo: bool,
    pub can_redo: bool,
}

/// Ordered list of commands plus a cursor.
///
/// Executing a command while the cursor is not at the tail discards the
/// redo branch before appending. With a limit set, the oldest command is
/// evicted once the list grows past it; without one the history grows for
/// the owner's lifetime.
///
/// # Example
///
/// ```rust
/// use widget_engine::history::{Command, CommandHistory};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let value = Rc::new(Cell::new(0));
/// let mut history = CommandHistory::new();
///
/// for next in 1..=3 {
///     let (fwd, inv) = (Rc::clone(&value), Rc::clone(&value));
///     history.execute(Command::new(move || fwd.set(next), move || inv.set(next - 1), ()));
/// }
/// assert_eq!(value.get(), 3);
///
/// assert!(history.undo());
/// assert!(history.undo());
/// assert_eq!(value.get(), 1);
///
/// assert!(history.redo());
/// assert_eq!(value.get(), 2);
/// assert_eq!(history.info().current_position, 1);
/// ```
pub struct CommandHistory<M> {
    commands: Vec<Rc<Command<M>>>,
    /// Number of commands currently applied; the cursor is `applied - 1`.
    applied: usize,
    limit: Option<usize>,
}

impl<M> CommandHistory<M> {
    /// Unbounded history.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            applied: 0,
            limit: None,
        }
    }

    /// History keeping at most `limit` commands. A limit of zero is treated
    /// as one.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit.max(1)),
            ..Self::new()
        }
    }

    /// Run the forward action and record the command.
    pub fn execute(&mut self, command: Command<M>) {
        self.record(command).execute();
    }

    /// Undo the command under the cursor. Returns false when nothing is
    /// applied.
    pub fn undo(&mut self) -> bool {
        match self.step_back() {
            Some(command) => {
                command.undo();
                true
            }
            None => false,
        }
    }

    /// Reapply the command after the cursor. Returns false at the tail.
    pub fn redo(&mut self) -> bool {
        match self.step_forward() {
            Some(command) => {
                command.execute();
                true
            }
            None => false,
        }
    }

    /// Truncate the redo branch and append `command` without running it.
    ///
    /// Returns the stored command so the caller can run it after releasing
    /// any borrow on the history.
    pub fn record(&mut self, command: Command<M>) -> Rc<Command<M>> {
        self.commands.truncate(self.applied);

        let command = Rc::new(command);
        self.commands.push(Rc::clone(&command));

        if let Some(limit) = self.limit {
            let overflow = self.commands.len().saturating_sub(limit);
            if overflow > 0 {
                self.commands.drain(..overflow);
            }
        }
        self.applied = self.commands.len();

        command
    }

    /// Move the cursor back one step and return the command whose inverse
    /// must run.
    pub fn step_back(&mut self) -> Option<Rc<Command<M>>> {
        if self.applied == 0 {
            return None;
        }
        self.applied -= 1;
        Some(Rc::clone(&self.commands[self.applied]))
    }

    /// Move the cursor forward one step and return the command whose
    /// forward action must run.
    pub fn step_forward(&mut self) -> Option<Rc<Command<M>>> {
        if self.applied == self.commands.len() {
            return None;
        }
        let command = Rc::clone(&self.commands[self.applied]);
        self.applied += 1;
        Some(command)
    }

    pub fn can_undo(&self) -> bool {
        self.applied > 0
    }

    pub fn can_redo(&self) -> bool {
        self.applied < self.commands.len()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Index of the last applied command, `-1` when none.
    pub fn cursor(&self) -> isize {
        self.applied as isize - 1
    }

    pub fn info(&self) -> HistoryInfo {
        HistoryInfo {
            length: self.len(),
            current_position: self.cursor(),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }

    /// Commands in execution order, applied and unapplied alike.
    pub fn commands(&self) -> impl Iterator<Item = &Command<M>> {
        self.commands.iter().map(|c| c.as_ref())
    }

    /// Forget every command.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.applied = 0;
    }
}

impl<M> Default for CommandHistory<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> fmt::Debug for CommandHistory<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandHistory")
            .field("info", &self.info())
            .field("limit", &self.limit)
            .finish()
    }
}
