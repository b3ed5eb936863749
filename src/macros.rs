//! Macros for declaring widget states.

/// Implement [`WidgetState`](crate::core::WidgetState) for a struct that
/// embeds a [`BaseState`](crate::core::BaseState).
///
/// The field is named `base` unless given explicitly.
///
/// # Example
///
/// ```
/// use serde::Serialize;
/// use widget_engine::core::{BaseState, WidgetState};
/// use widget_engine::widget_state;
///
/// #[derive(Clone, PartialEq, Debug, Default, Serialize)]
/// pub struct ChipState {
///     #[serde(flatten)]
///     pub common: BaseState,
///     pub selected: bool,
/// }
///
/// widget_state!(ChipState, common);
///
/// let chip = ChipState::default();
/// assert!(!chip.base().disabled);
/// ```
#[macro_export]
macro_rules! widget_state {
    ($name:ty) => {
        $crate::widget_state!($name, base);
    };
    ($name:ty, $field:ident) => {
        impl $crate::core::WidgetState for $name {
            fn base(&self) -> &$crate::core::BaseState {
                &self.$field
            }

            fn base_mut(&mut self) -> &mut $crate::core::BaseState {
                &mut self.$field
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{BaseState, WidgetState};
    use serde::Serialize;

    #[derive(Clone, PartialEq, Debug, Default, Serialize)]
    struct DefaultField {
        base: BaseState,
    }

    widget_state!(DefaultField);

    #[derive(Clone, PartialEq, Debug, Default, Serialize)]
    struct NamedField {
        shared: BaseState,
        extra: u8,
    }

    widget_state!(NamedField, shared);

    #[test]
    fn macro_wires_default_field() {
        let mut state = DefaultField::default();
        state.base_mut().loading = true;
        assert!(state.base().loading);
        assert!(state.base.loading);
    }

    #[test]
    fn macro_wires_named_field() {
        let mut state = NamedField::default();
        state.base_mut().pressed = true;
        assert!(state.shared.pressed);
        assert_eq!(state.extra, 0);
    }
}
