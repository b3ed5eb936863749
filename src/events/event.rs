//! Events published by a component.

use crate::history::HistoryInfo;
use crate::visual::CssState;
use serde::Serialize;
use serde_json::Value;

/// Published after every committed, undone or redone data-state change.
pub const STATE_CHANGED: &str = "stateChanged";
/// Published after a visual-state transition, following [`STATE_TRANSITION`].
pub const CSS_STATE_CHANGED: &str = "cssStateChanged";
/// Published when the current visual-state node changes.
pub const STATE_TRANSITION: &str = "stateTransition";
/// Published after a successful undo or redo.
pub const HISTORY_CHANGED: &str = "historyChanged";

/// Payload delivered to component subscribers.
///
/// Core events carry typed payloads; semantic events published by
/// interaction strategies (`clicked`, `toggled`, `valueChanged`, ...) carry
/// free-form JSON.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "camelCase")]
pub enum ComponentEvent<S> {
    StateChanged(S),
    CssStateChanged(CssState),
    StateTransition {
        from: Option<String>,
        to: String,
        state: S,
    },
    HistoryChanged(HistoryInfo),
    Semantic(Value),
}

impl<S> ComponentEvent<S> {
    /// The snapshot carried by `StateChanged` and `StateTransition`.
    pub fn state(&self) -> Option<&S> {
        match self {
            Self::StateChanged(state) | Self::StateTransition { state, .. } => Some(state),
            _ => None,
        }
    }

    /// The JSON body of a semantic event.
    pub fn semantic(&self) -> Option<&Value> {
        match self {
            Self::Semantic(value) => Some(value),
            _ => None,
        }
    }
}
