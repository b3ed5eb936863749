//! Per-component registry of visual-state nodes.

use super::node::{VisualNode, VisualStateNode, DEFAULT_NODES};
use crate::core::EngineError;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Named nodes owned by a single component.
///
/// Node identity is the `Rc` allocation: re-registering a name installs a
/// new node, distinct from the one it replaces.
#[derive(Default)]
pub struct VisualStateRegistry {
    nodes: HashMap<String, Rc<dyn VisualNode>>,
}

impl VisualStateRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding idle, hovered, focused, pressed, disabled, loading
    /// and error.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for name in DEFAULT_NODES {
            registry.register(VisualStateNode::new(name));
        }
        registry
    }

    /// Add or replace a node. Returns the node previously registered under
    /// the same name.
    pub fn register<N: VisualNode + 'static>(&mut self, node: N) -> Option<Rc<dyn VisualNode>> {
        self.register_shared(Rc::new(node))
    }

    pub fn register_shared(&mut self, node: Rc<dyn VisualNode>) -> Option<Rc<dyn VisualNode>> {
        self.nodes.insert(node.name().to_string(), node)
    }

    pub fn get(&self, name: &str) -> Option<&Rc<dyn VisualNode>> {
        self.nodes.get(name)
    }

    pub fn try_get(&self, name: &str) -> Result<&Rc<dyn VisualNode>, EngineError> {
        self.get(name).ok_or_else(|| EngineError::UnknownVisualState {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.nodes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl fmt::Debug for VisualStateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisualStateRegistry")
            .field("nodes", &self.names())
            .finish()
    }
}
