//! Push button: base state only.

use crate::component::Widget;
use crate::core::BaseState;
use serde::Serialize;

#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct ButtonState {
    #[serde(flatten)]
    pub base: BaseState,
}

crate::widget_state!(ButtonState);

/// A button uses the default strategies unchanged: click publishes
/// `clicked`, Enter and Space activate click.
#[derive(Clone, Debug, Default)]
pub struct Button {
    pub disabled: bool,
}

impl Button {
    pub fn disabled() -> Self {
        Self { disabled: true }
    }
}

impl Widget for Button {
    type State = ButtonState;
    const TYPE_TAG: &'static str = "button";

    fn initial_state(&self) -> ButtonState {
        ButtonState {
            base: BaseState {
                disabled: self.disabled,
                ..BaseState::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;
    use crate::strategy::CLICKED;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn starts_idle_or_disabled() {
        assert_eq!(Component::new(Button::default()).visual_state(), "idle");
        assert_eq!(Component::new(Button::disabled()).visual_state(), "disabled");
    }

    #[test]
    fn css_projection_has_type_tag_last() {
        let button = Component::new(Button::default());
        let css = button.css_state();
        assert_eq!(css.classes, vec!["component", "idle", "button"]);
        assert_eq!(css.attribute("data-disabled"), Some("false"));
    }

    #[test]
    fn press_then_click_releases() {
        let button = Component::new(Button::default());
        let clicks = Rc::new(Cell::new(0));
        let sink = Rc::clone(&clicks);
        button.subscribe(CLICKED, move |_| sink.set(sink.get() + 1));

        button.press(true);
        assert!(button.state().base.pressed);
        button.click();

        assert!(!button.state().base.pressed);
        assert_eq!(clicks.get(), 1);
        assert_eq!(button.visual_state(), "idle");
    }
}
