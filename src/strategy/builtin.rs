//! Strategies shared by every widget.

use super::payload::{bool_field, reject, str_field};
use super::result::{InteractionResult, DISABLED_OR_LOADING};
use super::{InteractionStrategy, KEYDOWN};
use crate::component::{Component, Widget};
use crate::core::{Checkable, WidgetState};
use serde_json::{json, Value};

pub const CLICKED: &str = "clicked";
pub const HOVER_CHANGED: &str = "hoverChanged";
pub const FOCUS_CHANGED: &str = "focusChanged";
pub const PRESS_CHANGED: &str = "pressChanged";
pub const TOGGLED: &str = "toggled";

/// Activation. Refused while disabled or loading; otherwise releases any
/// press and publishes `clicked`.
///
/// Unlike the other built-ins, `clicked` does not depend on the setter
/// reporting a change: the activation is the semantic event, so a click on
/// an idle widget publishes `clicked` and records no history.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClickStrategy;

impl<W: Widget> InteractionStrategy<W> for ClickStrategy {
    fn handle(&self, component: &Component<W>, _payload: &Value) -> InteractionResult {
        if component.state().base().is_inert() {
            return InteractionResult::prevented(DISABLED_OR_LOADING);
        }

        component.set_state(|s| s.base_mut().pressed = false);
        component.emit(CLICKED, json!({}));
        InteractionResult::handled()
    }
}

/// Pointer enter/leave. The flag follows the pointer even while disabled so
/// the widget can still render hover feedback, but `hoverChanged` is only
/// published for enabled widgets.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoverStrategy;

impl<W: Widget> InteractionStrategy<W> for HoverStrategy {
    fn handle(&self, component: &Component<W>, payload: &Value) -> InteractionResult {
        let hovered = match bool_field("hover", payload, "hovered") {
            Ok(hovered) => hovered,
            Err(err) => return reject(&err),
        };

        let disabled = component.state().base().disabled;
        let changed = component.set_state(|s| s.base_mut().hovered = hovered);
        if changed && !disabled {
            component.emit(HOVER_CHANGED, json!({ "hovered": hovered }));
        }
        InteractionResult::handled()
    }
}

/// Focus and blur. Focusing a disabled widget is refused; blurring always
/// goes through.
#[derive(Clone, Copy, Debug, Default)]
pub struct FocusStrategy;

impl<W: Widget> InteractionStrategy<W> for FocusStrategy {
    fn handle(&self, component: &Component<W>, payload: &Value) -> InteractionResult {
        let focused = match bool_field("focus", payload, "focused") {
            Ok(focused) => focused,
            Err(err) => return reject(&err),
        };

        if focused && component.state().base().disabled {
            return InteractionResult::prevented("disabled");
        }

        if component.set_state(|s| s.base_mut().focused = focused) {
            component.emit(FOCUS_CHANGED, json!({ "focused": focused }));
        }
        InteractionResult::handled()
    }
}

/// Pointer down/up. Pressing is refused while disabled or loading;
/// releasing always goes through so a press never gets stuck.
#[derive(Clone, Copy, Debug, Default)]
pub struct PressStrategy;

impl<W: Widget> InteractionStrategy<W> for PressStrategy {
    fn handle(&self, component: &Component<W>, payload: &Value) -> InteractionResult {
        let pressed = match bool_field("press", payload, "pressed") {
            Ok(pressed) => pressed,
            Err(err) => return reject(&err),
        };

        if pressed && component.state().base().is_inert() {
            return InteractionResult::prevented(DISABLED_OR_LOADING);
        }

        if component.set_state(|s| s.base_mut().pressed = pressed) {
            component.emit(PRESS_CHANGED, json!({ "pressed": pressed }));
        }
        InteractionResult::handled()
    }
}

/// Maps activation keys onto another interaction.
///
/// Enter and Space activate by default; other keys are left unhandled.
#[derive(Clone, Debug)]
pub struct KeyboardActivation {
    target: String,
    keys: Vec<String>,
}

impl KeyboardActivation {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            keys: vec!["Enter".to_string(), " ".to_string()],
        }
    }

    /// Replace the activating keys.
    pub fn with_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }
}

impl<W: Widget> InteractionStrategy<W> for KeyboardActivation {
    fn handle(&self, component: &Component<W>, payload: &Value) -> InteractionResult {
        let key = match str_field(KEYDOWN, payload, "key") {
            Ok(key) => key,
            Err(err) => return reject(&err),
        };

        if self.keys.iter().any(|k| k == key) {
            component.handle_interaction(&self.target, Value::Null)
        } else {
            InteractionResult::unhandled("unhandled key")
        }
    }
}

/// Flips the checked flag of any [`Checkable`] state and publishes
/// `toggled` with the new value.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToggleStrategy;

impl<W> InteractionStrategy<W> for ToggleStrategy
where
    W: Widget,
    W::State: Checkable,
{
    fn handle(&self, component: &Component<W>, _payload: &Value) -> InteractionResult {
        let state = component.state();
        if state.base().is_inert() {
            return InteractionResult::prevented(DISABLED_OR_LOADING);
        }

        let checked = !state.is_checked();
        if component.set_state(|s| s.set_checked(checked)) {
            component.emit(TOGGLED, json!({ "checked": checked }));
        }
        InteractionResult::handled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{Button, Toggle};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn record<W: Widget>(component: &Component<W>, event: &str) -> Rc<RefCell<Vec<Value>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        component.subscribe(event, move |e| {
            if let Some(value) = e.semantic() {
                sink.borrow_mut().push(value.clone());
            }
        });
        seen
    }

    #[test]
    fn click_emits_clicked_when_enabled() {
        let button = Component::new(Button::default());
        let clicks = record(&button, CLICKED);

        let result = button.click();

        assert_eq!(result, InteractionResult::handled());
        assert_eq!(clicks.borrow().len(), 1);
    }

    #[test]
    fn click_without_data_change_still_publishes() {
        let button = Component::new(Button::default());
        let clicks = record(&button, CLICKED);
        let before = button.state();

        button.click();
        button.click();

        assert_eq!(clicks.borrow().len(), 2);
        assert_eq!(button.state(), before);
        assert_eq!(button.history().length, 0);
    }

    #[test]
    fn click_is_prevented_while_loading() {
        let button = Component::new(Button::default());
        let clicks = record(&button, CLICKED);
        button.set_loading(true);
        let before = button.state();

        let result = button.click();

        assert_eq!(result, InteractionResult::prevented(DISABLED_OR_LOADING));
        assert!(clicks.borrow().is_empty());
        assert_eq!(button.state(), before);
    }

    #[test]
    fn hover_updates_flag_while_disabled_without_event() {
        let button = Component::new(Button::default());
        let hovers = record(&button, HOVER_CHANGED);
        button.set_disabled(true);

        let result = button.hover(true);

        assert!(result.handled);
        assert!(button.state().base.hovered);
        assert!(hovers.borrow().is_empty());
    }

    #[test]
    fn hover_emits_only_on_change() {
        let button = Component::new(Button::default());
        let hovers = record(&button, HOVER_CHANGED);

        button.hover(true);
        button.hover(true);
        button.hover(false);

        assert_eq!(
            *hovers.borrow(),
            vec![json!({"hovered": true}), json!({"hovered": false})]
        );
    }

    #[test]
    fn focus_refused_when_disabled() {
        let button = Component::new(Button::default());
        button.set_disabled(true);

        let result = button.focus(true);

        assert!(result.prevented);
        assert_eq!(result.reason.as_deref(), Some("disabled"));
        assert!(!button.state().base.focused);
    }

    #[test]
    fn blur_allowed_when_disabled() {
        let button = Component::new(Button::default());
        button.focus(true);
        button.set_disabled(true);

        let result = button.focus(false);

        assert!(result.handled);
        assert!(!button.state().base.focused);
    }

    #[test]
    fn press_and_release() {
        let button = Component::new(Button::default());
        let presses = record(&button, PRESS_CHANGED);

        button.press(true);
        assert_eq!(button.visual_state(), "pressed");
        button.press(false);
        assert_eq!(button.visual_state(), "idle");
        assert_eq!(presses.borrow().len(), 2);
    }

    #[test]
    fn bad_payload_is_rejected_without_change() {
        let button = Component::new(Button::default());
        let result = button.handle_interaction("hover", json!("yes"));
        assert_eq!(result, InteractionResult::prevented("invalid payload"));
        assert_eq!(button.history().length, 0);
    }

    #[test]
    fn keyboard_activation_maps_enter_and_space() {
        let button = Component::new(Button::default());
        let clicks = record(&button, CLICKED);

        assert!(button.keydown("Enter").handled);
        assert!(button.keydown(" ").handled);
        let other = button.keydown("a");

        assert!(!other.handled);
        assert_eq!(other.reason.as_deref(), Some("unhandled key"));
        assert_eq!(clicks.borrow().len(), 2);
    }

    #[test]
    fn custom_activation_keys() {
        let activation = KeyboardActivation::new("click").with_keys(["F2"]);
        let button = Component::new(Button::default());
        button.register_strategy(KEYDOWN, activation);

        assert!(!button.keydown("Enter").handled);
        assert!(button.keydown("F2").handled);
    }

    #[test]
    fn toggle_flips_checked() {
        let toggle = Component::new(Toggle::default());
        let toggles = record(&toggle, TOGGLED);

        toggle.toggle();
        toggle.toggle();

        assert_eq!(
            *toggles.borrow(),
            vec![json!({"checked": true}), json!({"checked": false})]
        );
        assert!(!toggle.state().checked);
    }
}
