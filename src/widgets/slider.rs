//! Numeric range slider.

use crate::component::{Component, Widget};
use crate::core::BaseState;
use crate::strategy::payload::{number_field, reject, str_field};
use crate::strategy::{
    InteractionResult, InteractionStrategy, StrategyTable, DISABLED_OR_LOADING, KEYDOWN,
};
use serde::Serialize;
use serde_json::{json, Value};

pub const SET_VALUE: &str = "setValue";
pub const VALUE_CHANGED: &str = "valueChanged";

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct SliderState {
    #[serde(flatten)]
    pub base: BaseState,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

crate::widget_state!(SliderState);

impl SliderState {
    /// Snap to the step grid anchored at `min`, then clamp into range. A
    /// non-positive step disables snapping. NaN input lands on `min`.
    pub fn normalize(&self, value: f64) -> f64 {
        let snapped = if self.step > 0.0 {
            self.min + ((value - self.min) / self.step).round() * self.step
        } else {
            value
        };
        let snapped = if snapped.is_nan() { value } else { snapped };
        // `clamp` panics on NaN bounds.
        let clamped = snapped.max(self.min).min(self.max);
        if clamped.is_nan() {
            0.0
        } else {
            clamped
        }
    }
}

#[derive(Clone, Debug)]
pub struct Slider {
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for Slider {
    fn default() -> Self {
        Self {
            value: 0.0,
            min: 0.0,
            max: 100.0,
            step: 1.0,
        }
    }
}

impl Widget for Slider {
    type State = SliderState;
    const TYPE_TAG: &'static str = "slider";

    fn initial_state(&self) -> SliderState {
        let defaults = Slider::default();
        let min = finite_or(self.min, defaults.min, "min");
        let max = finite_or(self.max, defaults.max, "max");
        let step = finite_or(self.step, defaults.step, "step");
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let mut state = SliderState {
            base: BaseState::default(),
            value: min,
            min,
            max,
            step,
        };
        state.value = state.normalize(self.value);
        state
    }

    fn register_strategies(&self, strategies: &mut StrategyTable<Self>) {
        strategies.register(SET_VALUE, SetValueStrategy);
        strategies.register(KEYDOWN, SliderKeys);
    }
}

fn finite_or(value: f64, fallback: f64, field: &str) -> f64 {
    if value.is_finite() {
        value
    } else {
        tracing::warn!(
            widget = Slider::TYPE_TAG,
            field,
            value,
            "non-finite slider setting; falling back to {fallback}"
        );
        fallback
    }
}

/// Moves the value, normalized to the step grid and range.
#[derive(Clone, Copy, Debug, Default)]
pub struct SetValueStrategy;

impl InteractionStrategy<Slider> for SetValueStrategy {
    fn handle(&self, component: &Component<Slider>, payload: &Value) -> InteractionResult {
        let state = component.state();
        if state.base.is_inert() {
            return InteractionResult::prevented(DISABLED_OR_LOADING);
        }

        let requested = match number_field(SET_VALUE, payload, "value") {
            Ok(value) => value,
            Err(err) => return reject(&err),
        };
        let next = state.normalize(requested);

        if component.set_state(|s| s.value = next) {
            component.emit(
                VALUE_CHANGED,
                json!({ "oldValue": state.value, "newValue": next }),
            );
        }
        InteractionResult::handled()
    }
}

/// Arrow, Page and Home/End keys mapped onto `setValue`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SliderKeys;

impl InteractionStrategy<Slider> for SliderKeys {
    fn handle(&self, component: &Component<Slider>, payload: &Value) -> InteractionResult {
        let key = match str_field(KEYDOWN, payload, "key") {
            Ok(key) => key,
            Err(err) => return reject(&err),
        };

        let state = component.state();
        let target = match key {
            "ArrowUp" | "ArrowRight" => state.value + state.step,
            "ArrowDown" | "ArrowLeft" => state.value - state.step,
            "PageUp" => state.value + state.step * 10.0,
            "PageDown" => state.value - state.step * 10.0,
            "Home" => state.min,
            "End" => state.max,
            _ => return InteractionResult::unhandled("unhandled key"),
        };
        component.handle_interaction(SET_VALUE, json!({ "value": target }))
    }
}

impl Component<Slider> {
    pub fn set_value(&self, value: f64) -> InteractionResult {
        self.handle_interaction(SET_VALUE, json!({ "value": value }))
    }

    pub fn increment(&self) -> InteractionResult {
        self.keydown("ArrowUp")
    }

    pub fn decrement(&self) -> InteractionResult {
        self.keydown("ArrowDown")
    }

    pub fn value(&self) -> f64 {
        self.state().value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn slider() -> Component<Slider> {
        Component::new(Slider {
            value: 50.0,
            min: 0.0,
            max: 100.0,
            step: 5.0,
        })
    }

    #[test]
    fn set_value_clamps_and_snaps() {
        let slider = slider();

        slider.set_value(62.0);
        assert_eq!(slider.value(), 60.0);

        slider.set_value(140.0);
        assert_eq!(slider.value(), 100.0);

        slider.set_value(-3.0);
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn keys_step_through_range() {
        let slider = slider();

        slider.increment();
        assert_eq!(slider.value(), 55.0);
        slider.decrement();
        slider.decrement();
        assert_eq!(slider.value(), 45.0);
        slider.keydown("End");
        assert_eq!(slider.value(), 100.0);
        slider.keydown("PageDown");
        assert_eq!(slider.value(), 50.0);
        slider.keydown("Home");
        assert_eq!(slider.value(), 0.0);

        assert!(!slider.keydown("Tab").handled);
    }

    #[test]
    fn value_changed_only_on_real_change() {
        let slider = slider();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        slider.subscribe(VALUE_CHANGED, move |e| {
            if let Some(v) = e.semantic() {
                sink.borrow_mut().push(v.clone());
            }
        });

        slider.set_value(51.0);
        slider.set_value(55.0);

        assert_eq!(
            *seen.borrow(),
            vec![json!({"oldValue": 50.0, "newValue": 55.0})]
        );
    }

    #[test]
    fn disabled_slider_ignores_keys() {
        let slider = slider();
        slider.set_disabled(true);

        let result = slider.increment();

        assert_eq!(result, InteractionResult::prevented(DISABLED_OR_LOADING));
        assert_eq!(slider.value(), 50.0);
    }

    #[test]
    fn inverted_bounds_are_swapped() {
        let slider = Component::new(Slider {
            value: 500.0,
            min: 10.0,
            max: 0.0,
            step: 1.0,
        });
        let state = slider.state();
        assert_eq!((state.min, state.max, state.value), (0.0, 10.0, 10.0));
    }

    #[test]
    fn nan_bound_falls_back_to_default() {
        let slider = Component::new(Slider {
            value: 5.0,
            min: f64::NAN,
            max: 10.0,
            step: 1.0,
        });
        let state = slider.state();
        assert_eq!((state.min, state.max, state.value), (0.0, 10.0, 5.0));
    }

    #[test]
    fn infinite_bounds_keep_value_finite_and_updates_idempotent() {
        let slider = Component::new(Slider {
            value: 5.0,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            step: f64::INFINITY,
        });
        let state = slider.state();
        assert_eq!((state.min, state.max, state.step), (0.0, 100.0, 1.0));
        assert_eq!(state.value, 5.0);

        assert!(!slider.set_state(|s| s.value = 5.0));
        assert_eq!(slider.history().length, 0);
    }

    #[test]
    fn normalize_never_yields_nan() {
        let state = SliderState {
            base: BaseState::default(),
            value: 0.0,
            min: 0.0,
            max: 10.0,
            step: 2.0,
        };
        assert_eq!(state.normalize(f64::NAN), 0.0);
        assert_eq!(state.normalize(f64::INFINITY), 10.0);

        let unbounded = SliderState {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            ..state
        };
        assert_eq!(unbounded.normalize(3.0), 3.0);
    }

    #[test]
    fn bad_payload_rejected() {
        let slider = slider();
        let result = slider.handle_interaction(SET_VALUE, json!({"value": "high"}));
        assert!(result.prevented);
        assert_eq!(slider.value(), 50.0);
    }
}
