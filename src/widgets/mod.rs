//! Ready-made widgets built on [`Component`](crate::component::Component).
//!
//! Each widget module exposes its state type, the widget description, the
//! strategies it installs and an `impl Component<…>` block with convenience
//! methods. Interaction and event names live in the widget's module.

pub mod accordion;
pub mod button;
pub mod checkbox;
pub mod radio_group;
pub mod slider;
pub mod tabs;
pub mod text_input;
pub mod toggle;

pub use accordion::{Accordion, AccordionState};
pub use button::{Button, ButtonState};
pub use checkbox::{Checkbox, CheckboxState};
pub use radio_group::{RadioGroup, RadioGroupState};
pub use slider::{Slider, SliderState};
pub use tabs::{Tabs, TabsState};
pub use text_input::{TextInput, TextInputState};
pub use toggle::{Toggle, ToggleState};
