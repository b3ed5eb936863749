//! Guard predicates over data-state snapshots.
//!
//! Guards are pure boolean functions. The visual-state derivation chain uses
//! them to rank nodes, and interaction strategies use them to refuse an
//! interaction before touching state.

use super::state::WidgetState;
use std::fmt;
use std::rc::Rc;

/// Pure predicate over a widget snapshot.
///
/// Guards are cheap to clone; clones share the same predicate.
///
/// # Example
///
/// ```rust
/// use widget_engine::core::{BaseState, Guard};
///
/// let inert = Guard::new(|s: &BaseState| s.disabled || s.loading);
///
/// let mut state = BaseState::default();
/// assert!(!inert.check(&state));
///
/// state.loading = true;
/// assert!(inert.check(&state));
/// ```
pub struct Guard<S: WidgetState> {
    predicate: Rc<dyn Fn(&S) -> bool>,
}

impl<S: WidgetState> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and side-effect free: the engine
    /// may evaluate it any number of times for the same snapshot.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + 'static,
    {
        Guard {
            predicate: Rc::new(predicate),
        }
    }

    /// Guard true when the widget is disabled or loading.
    pub fn inert() -> Self {
        Self::new(|s: &S| s.base().is_inert())
    }

    /// Check the predicate against a snapshot.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }

    /// Guard that passes only when both guards pass.
    pub fn and(&self, other: &Guard<S>) -> Self {
        let left = Rc::clone(&self.predicate);
        let right = Rc::clone(&other.predicate);
        Self::new(move |s| left(s) && right(s))
    }

    /// Guard that passes when either guard passes.
    pub fn or(&self, other: &Guard<S>) -> Self {
        let left = Rc::clone(&self.predicate);
        let right = Rc::clone(&other.predicate);
        Self::new(move |s| left(s) || right(s))
    }
}

impl<S: WidgetState> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Rc::clone(&self.predicate),
        }
    }
}

impl<S: WidgetState> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
