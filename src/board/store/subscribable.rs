//! Generic snapshot-notifying collection.

use std::sync::{PoisonError, RwLock};

/// Callback registered to observe store changes.
///
/// Each invocation receives an owned snapshot of the full collection, so
/// a subscriber can never reach the store's live state through the value
/// it was handed.
pub type Subscriber<T> = Box<dyn Fn(Vec<T>) + Send + Sync>;

/// An ordered collection that notifies registered subscribers after every
/// mutation that reports a change.
///
/// Subscribers fire in registration order, after the collection lock has
/// been released, and always observe a fully-applied snapshot. A
/// subscriber must not mutate the store synchronously from inside its
/// callback; that discipline is documented rather than enforced, matching
/// the single-threaded event-driven deployment this models.
pub struct SubscribableStore<T> {
    items: RwLock<Vec<T>>,
    subscribers: RwLock<Vec<Subscriber<T>>>,
}

impl<T> SubscribableStore<T> {
    /// Creates an empty store with no subscribers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Registers a subscriber.
    ///
    /// Subscribers are invoked in registration order on every subsequent
    /// change. There is no unsubscription; registrations live as long as
    /// the store.
    pub fn subscribe(&self, subscriber: impl Fn(Vec<T>) + Send + Sync + 'static) {
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(subscriber));
    }

    /// Returns the number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl<T: Clone> SubscribableStore<T> {
    /// Returns an owned copy of the current collection.
    #[must_use]
    pub fn snapshot(&self) -> Vec<T> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Applies `mutation` to the collection and notifies subscribers.
    ///
    /// The mutation reports whether it changed anything; when it returns
    /// `false` no snapshot is taken and no subscriber fires. The
    /// collection lock is dropped before subscribers run.
    pub(crate) fn update(&self, mutation: impl FnOnce(&mut Vec<T>) -> bool) {
        let snapshot = {
            let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
            if !mutation(&mut items) {
                return;
            }
            items.clone()
        };
        self.notify(&snapshot);
    }

    /// Hands every subscriber its own copy of the snapshot.
    fn notify(&self, snapshot: &[T]) {
        let subscribers = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        for subscriber in subscribers.iter() {
            subscriber(snapshot.to_vec());
        }
    }
}

impl<T> Default for SubscribableStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
