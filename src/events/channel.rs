//! Synchronous publish/subscribe channel.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;

struct Subscriber<T> {
    id: u64,
    event: String,
    callback: Callback<T>,
}

type SubscriberList<T> = RefCell<Vec<Subscriber<T>>>;

/// Named-event channel delivering `&T` to every subscriber of an event.
///
/// Delivery iterates over a snapshot of the subscriber list, so a callback
/// may subscribe or unsubscribe (itself included) while an event is being
/// delivered. A panicking callback is logged and skipped; it never stops
/// delivery to the remaining subscribers and never reaches the notifier.
///
/// # Example
///
/// ```rust
/// use widget_engine::events::EventChannel;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let channel: EventChannel<u32> = EventChannel::new();
/// let seen = Rc::new(Cell::new(0));
///
/// let sink = Rc::clone(&seen);
/// let subscription = channel.subscribe("tick", move |n| sink.set(*n));
///
/// channel.notify("tick", &7);
/// assert_eq!(seen.get(), 7);
///
/// subscription.unsubscribe();
/// channel.notify("tick", &9);
/// assert_eq!(seen.get(), 7);
/// ```
pub struct EventChannel<T> {
    subscribers: Rc<SubscriberList<T>>,
    next_id: Cell<u64>,
}

impl<T: 'static> EventChannel<T> {
    pub fn new() -> Self {
        Self {
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_id: Cell::new(0),
        }
    }

    /// Register `callback` for `event`. Several callbacks per event are allowed.
    pub fn subscribe<F>(&self, event: impl Into<String>, callback: F) -> Subscription<T>
    where
        F: Fn(&T) + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        self.subscribers.borrow_mut().push(Subscriber {
            id,
            event: event.into(),
            callback: Rc::new(callback),
        });

        Subscription {
            id,
            subscribers: Rc::downgrade(&self.subscribers),
        }
    }

    /// Deliver `data` to every callback currently registered for `event`.
    pub fn notify(&self, event: &str, data: &T) {
        let snapshot: Vec<Callback<T>> = self
            .subscribers
            .borrow()
            .iter()
            .filter(|s| s.event == event)
            .map(|s| Rc::clone(&s.callback))
            .collect();

        for callback in snapshot {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| callback(data)));
            if let Err(payload) = outcome {
                tracing::error!(event, "subscriber panicked: {}", panic_message(&*payload));
            }
        }
    }

    /// Number of callbacks registered for `event`.
    pub fn subscriber_count(&self, event: &str) -> usize {
        self.subscribers
            .borrow()
            .iter()
            .filter(|s| s.event == event)
            .count()
    }

    /// Drop every subscription.
    pub fn clear(&self) {
        self.subscribers.borrow_mut().clear();
    }
}

impl<T: 'static> Default for EventChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventChannel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventChannel")
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}

/// Handle returned by [`EventChannel::subscribe`].
///
/// Dropping the handle keeps the subscription alive; call
/// [`unsubscribe`](Subscription::unsubscribe) to remove it.
pub struct Subscription<T> {
    id: u64,
    subscribers: Weak<SubscriberList<T>>,
}

impl<T> Subscription<T> {
    /// Remove the callback. Calling this more than once, or after the
    /// channel is gone, does nothing.
    pub fn unsubscribe(&self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers.borrow_mut().retain(|s| s.id != self.id);
        }
    }

    /// True while the callback is still registered.
    pub fn is_active(&self) -> bool {
        self.subscribers
            .upgrade()
            .is_some_and(|subscribers| subscribers.borrow().iter().any(|s| s.id == self.id))
    }
}

impl<T> Clone for Subscription<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            subscribers: Weak::clone(&self.subscribers),
        }
    }
}

impl<T> fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
