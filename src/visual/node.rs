//! Visual-state nodes.

use std::fmt;

pub const IDLE: &str = "idle";
pub const HOVERED: &str = "hovered";
pub const FOCUSED: &str = "focused";
pub const PRESSED: &str = "pressed";
pub const DISABLED: &str = "disabled";
pub const LOADING: &str = "loading";
pub const ERROR: &str = "error";

/// Names of the nodes every registry starts with.
pub const DEFAULT_NODES: [&str; 7] = [IDLE, HOVERED, FOCUSED, PRESSED, DISABLED, LOADING, ERROR];

/// A named visual state.
///
/// Exactly one node is current per component. `enter` and `exit` run only
/// on an actual change of node.
pub trait VisualNode {
    fn name(&self) -> &str;

    /// Ordered CSS classes this node contributes. Defaults to its name.
    fn css_classes(&self) -> Vec<String> {
        vec![self.name().to_string()]
    }

    fn enter(&self) {}

    fn exit(&self) {}
}

type Hook = Box<dyn Fn()>;

/// General-purpose node with optional classes and hooks.
///
/// # Example
///
/// ```rust
/// use widget_engine::visual::{VisualNode, VisualStateNode};
///
/// let node = VisualStateNode::new("dragging").with_classes(["dragging", "grabbing"]);
/// assert_eq!(node.name(), "dragging");
/// assert_eq!(node.css_classes(), vec!["dragging", "grabbing"]);
/// ```
pub struct VisualStateNode {
    name: String,
    classes: Option<Vec<String>>,
    on_enter: Option<Hook>,
    on_exit: Option<Hook>,
}

impl VisualStateNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classes: None,
            on_enter: None,
            on_exit: None,
        }
    }

    /// Replace the default single-class projection.
    pub fn with_classes<I, C>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        self.classes = Some(classes.into_iter().map(Into::into).collect());
        self
    }

    pub fn on_enter<F: Fn() + 'static>(mut self, hook: F) -> Self {
        self.on_enter = Some(Box::new(hook));
        self
    }

    pub fn on_exit<F: Fn() + 'static>(mut self, hook: F) -> Self {
        self.on_exit = Some(Box::new(hook));
        self
    }
}

impl VisualNode for VisualStateNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn css_classes(&self) -> Vec<String> {
        match &self.classes {
            Some(classes) => classes.clone(),
            None => vec![self.name.clone()],
        }
    }

    fn enter(&self) {
        if let Some(hook) = &self.on_enter {
            hook();
        }
    }

    fn exit(&self) {
        if let Some(hook) = &self.on_exit {
            hook();
        }
    }
}

impl fmt::Debug for VisualStateNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisualStateNode")
            .field("name", &self.name)
            .field("classes", &self.css_classes())
            .finish_non_exhaustive()
    }
}
