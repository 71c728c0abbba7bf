//! Subscribe to values emitted by the scroll engine.
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A list of listeners interested in values of type `E`.
///
/// Emission is re-entrancy safe: a listener may subscribe, unsubscribe, or
/// trigger another emission while being notified. Listeners registered
/// during an emission are only notified on the next one.
///
/// Cloning a [`Listeners`] produces a handle to the same listener list.
pub struct Listeners<E> {
    shared: Rc<RefCell<Shared<E>>>,
}

struct Shared<E> {
    entries: Vec<Entry<E>>,
    next_id: u64,
}

struct Entry<E> {
    id: u64,
    callback: Rc<dyn Fn(&E)>,
}

impl<E: 'static> Listeners<E> {
    /// Creates an empty listener list.
    pub fn new() -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                entries: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Registers `callback` to be invoked on every emission.
    ///
    /// The returned [`Subscription`] releases the registration when dropped.
    pub fn subscribe(&self, callback: impl Fn(&E) + 'static) -> Subscription {
        let id = {
            let mut shared = self.shared.borrow_mut();
            let id = shared.next_id;
            shared.next_id += 1;
            shared.entries.push(Entry {
                id,
                callback: Rc::new(callback),
            });
            id
        };

        let weak: Weak<RefCell<Shared<E>>> = Rc::downgrade(&self.shared);

        Subscription {
            release: Some(Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.borrow_mut().entries.retain(|entry| entry.id != id);
                }
            })),
        }
    }

    /// Notifies every registered listener, in subscription order.
    pub fn emit(&self, event: &E) {
        // Snapshot so listeners can mutate the list re-entrantly.
        let callbacks: Vec<Rc<dyn Fn(&E)>> = self
            .shared
            .borrow()
            .entries
            .iter()
            .map(|entry| Rc::clone(&entry.callback))
            .collect();

        for callback in callbacks {
            callback(event);
        }
    }

    /// The number of registered listeners.
    pub fn len(&self) -> usize {
        self.shared.borrow().entries.len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.shared.borrow().entries.is_empty()
    }
}

impl<E> Clone for Listeners<E> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<E: 'static> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> std::fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("listeners", &self.len())
            .finish()
    }
}

/// A handle to an active subscription.
///
/// Dropping the handle unsubscribes the listener, scoping the registration
/// to the lifetime of the handle.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Unsubscribes the listener now.
    pub fn unsubscribe(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    /// Keeps the listener registered for the lifetime of its emitter.
    pub fn detach(mut self) {
        drop(self.release.take());
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_emit_notifies_in_subscription_order() {
        let listeners: Listeners<u32> = Listeners::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = listeners.subscribe({
            let seen = Rc::clone(&seen);
            move |value| seen.borrow_mut().push((1, *value))
        });
        let second = listeners.subscribe({
            let seen = Rc::clone(&seen);
            move |value| seen.borrow_mut().push((2, *value))
        });

        listeners.emit(&7);
        assert_eq!(*seen.borrow(), vec![(1, 7), (2, 7)]);

        first.unsubscribe();
        second.unsubscribe();
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_drop_unsubscribes() {
        let listeners: Listeners<()> = Listeners::new();
        let calls = Rc::new(Cell::new(0));

        {
            let _subscription = listeners.subscribe({
                let calls = Rc::clone(&calls);
                move |()| calls.set(calls.get() + 1)
            });
            listeners.emit(&());
        }

        listeners.emit(&()); // subscription dropped, not notified
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_detach_keeps_listener_alive() {
        let listeners: Listeners<()> = Listeners::new();
        let calls = Rc::new(Cell::new(0));

        listeners
            .subscribe({
                let calls = Rc::clone(&calls);
                move |()| calls.set(calls.get() + 1)
            })
            .detach();

        listeners.emit(&());
        listeners.emit(&());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_reentrant_unsubscribe_during_emission() {
        let listeners: Listeners<()> = Listeners::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let calls = Rc::new(Cell::new(0));

        let subscription = listeners.subscribe({
            let slot = Rc::clone(&slot);
            let calls = Rc::clone(&calls);
            move |()| {
                calls.set(calls.get() + 1);
                // Unsubscribe ourselves while being notified.
                if let Some(subscription) = slot.borrow_mut().take() {
                    subscription.unsubscribe();
                }
            }
        });
        *slot.borrow_mut() = Some(subscription);

        listeners.emit(&());
        listeners.emit(&());
        assert_eq!(calls.get(), 1);
    }
}
