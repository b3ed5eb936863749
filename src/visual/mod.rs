//! Visual-state machine.
//!
//! A component holds a registry of named [`VisualNode`]s and exactly one
//! current node. The current node is re-derived from the data snapshot by a
//! [`DerivationChain`] after every committed, undone or redone change; the
//! component drives the transition, this module only supplies the parts.

mod derivation;
mod node;
mod projection;
mod registry;

pub use derivation::DerivationChain;
pub use node::{
    VisualNode, VisualStateNode, DEFAULT_NODES, DISABLED, ERROR, FOCUSED, HOVERED, IDLE, LOADING,
    PRESSED,
};
pub use projection::{data_attributes, kebab_case, CssState};
pub use registry::VisualStateRegistry;
