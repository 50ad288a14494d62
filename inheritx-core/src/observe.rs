//! State-change notification.
//!
//! Session managers notify subscribers after every mutation with a snapshot
//! of the new state. In the browser this drives re-rendering; the admin gate
//! uses it to evaluate redirects once per change.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Listener<T> = Rc<dyn Fn(&T)>;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Raw numeric id, for handing across FFI boundaries.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for SubscriptionId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// A list of state listeners.
pub struct Listeners<T> {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(SubscriptionId, Listener<T>)>>,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            next_id: Cell::new(0),
            entries: RefCell::new(Vec::new()),
        }
    }
}

impl<T> Listeners<T> {
    /// Create an empty listener list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.entries.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        entries.len() != before
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Invoke every listener with `state`.
    ///
    /// The list is snapshotted first, so listeners may subscribe or
    /// unsubscribe while being notified.
    pub fn notify(&self, state: &T) {
        let snapshot: Vec<Listener<T>> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in snapshot {
            listener(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_and_unsubscribe() {
        let listeners = Listeners::<u32>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let id = listeners.subscribe(move |v| sink.borrow_mut().push(*v));
        listeners.notify(&1);
        listeners.notify(&2);

        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));
        listeners.notify(&3);

        assert_eq!(*seen.borrow(), vec![1, 2]);
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_listener_may_subscribe_during_notify() {
        let listeners = Rc::new(Listeners::<u32>::new());
        let inner = Rc::clone(&listeners);
        listeners.subscribe(move |_| {
            inner.subscribe(|_| {});
        });

        listeners.notify(&0);
        assert_eq!(listeners.len(), 2);
    }
}
