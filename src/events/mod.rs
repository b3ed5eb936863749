//! Event delivery.
//!
//! - `EventChannel`: synchronous, panic-isolated publish/subscribe
//! - `ComponentEvent`: payloads a component publishes, with the core event names

mod channel;
mod event;

pub use channel::{EventChannel, Subscription};
pub use event::{
    ComponentEvent, CSS_STATE_CHANGED, HISTORY_CHANGED, STATE_CHANGED, STATE_TRANSITION,
};
