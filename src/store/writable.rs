//! Writable store
//!
//! A shared value with synchronous observer notification.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::thread::{self, ThreadId};

use parking_lot::{Condvar, Mutex, RwLock};

type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Reactive container for a single value
///
/// Cloning a `Writable` yields another handle to the same value and the same
/// observer list.
///
/// ## Delivery
/// - `subscribe` calls the new observer with the current value right away
/// - Every `set`/`update` notifies all observers before returning, in
///   registration order
/// - Values are never compared: setting an equal value still notifies
/// - An observer that writes back into the store has its write queued behind
///   the delivery in progress, so every observer sees values in the same order
/// - A `set` from another thread waits for the delivery in progress to finish;
///   values are stored in the same order they are delivered. An observer
///   must therefore not block on another thread's `set` of the same store
/// - A panicking observer drops the rest of that delivery; later writes are
///   delivered normally
pub struct Writable<T> {
    shared: Arc<Shared<T>>,
}

struct Shared<T> {
    value: RwLock<T>,
    observers: Mutex<Vec<(u64, Observer<T>)>>,
    delivery: Mutex<Delivery<T>>,
    drained: Condvar,
    next_id: AtomicU64,
}

struct Delivery<T> {
    pending: VecDeque<(Observer<T>, T)>,

    /// Thread currently running observers, if any
    draining: Option<ThreadId>,
}

impl<T> Clone for Writable<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> Writable<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a store holding `value`
    pub fn new(value: T) -> Self {
        Self {
            shared: Arc::new(Shared {
                value: RwLock::new(value),
                observers: Mutex::new(Vec::new()),
                delivery: Mutex::new(Delivery {
                    pending: VecDeque::new(),
                    draining: None,
                }),
                drained: Condvar::new(),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    /// Snapshot of the current value
    pub fn get(&self) -> T {
        self.shared.value.read().clone()
    }

    /// Register an observer
    ///
    /// The observer runs immediately with the current value and again after
    /// every replacement until the returned handle is unsubscribed. Dropping
    /// the handle does not unsubscribe.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let observer: Observer<T> = Arc::new(observer);
        let id = self.shared.next_id.fetch_add(1, Ordering::Relaxed);

        self.shared
            .observers
            .lock()
            .push((id, Arc::clone(&observer)));

        let current = self.get();
        observer(&current);

        let weak: Weak<Shared<T>> = Arc::downgrade(&self.shared);
        Subscription {
            detach: Some(Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.observers.lock().retain(|(other, _)| *other != id);
                }
            })),
        }
    }

    /// Replace the value and notify every observer
    pub fn set(&self, value: T) {
        let me = thread::current().id();
        let mut delivery = self.shared.delivery.lock();

        // Another thread is delivering: wait so store order matches delivery order
        while matches!(delivery.draining, Some(owner) if owner != me) {
            self.shared.drained.wait(&mut delivery);
        }

        *self.shared.value.write() = value.clone();
        for (_, observer) in self.shared.observers.lock().iter() {
            delivery
                .pending
                .push_back((Arc::clone(observer), value.clone()));
        }

        // Re-entrant write from an observer; the outer drain delivers it
        if delivery.draining.is_some() {
            return;
        }
        delivery.draining = Some(me);
        drop(delivery);

        self.drain();
    }

    /// Replace the value with one computed from the current value
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let current = self.get();
        self.set(f(&current));
    }

    /// Number of registered observers
    pub fn subscriber_count(&self) -> usize {
        self.shared.observers.lock().len()
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Run queued deliveries until the queue is empty
    fn drain(&self) {
        let _guard = DrainGuard {
            shared: &self.shared,
        };

        // No lock is held while an observer runs.
        loop {
            let next = self.shared.delivery.lock().pending.pop_front();
            match next {
                Some((observer, value)) => observer(&value),
                None => break,
            }
        }
    }
}

/// Releases the drain on exit, including unwinding out of an observer
struct DrainGuard<'a, T> {
    shared: &'a Shared<T>,
}

impl<T> Drop for DrainGuard<'_, T> {
    fn drop(&mut self) {
        let mut delivery = self.shared.delivery.lock();
        delivery.pending.clear();
        delivery.draining = None;
        self.shared.drained.notify_all();
    }
}

impl<T> std::fmt::Debug for Writable<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Writable")
            .field("value", &*self.shared.value.read())
            .field("observers", &self.shared.observers.lock().len())
            .finish()
    }
}

/// Handle returned by [`Writable::subscribe`]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Stop receiving values; calling this again is a no-op
    pub fn unsubscribe(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }

    /// Whether this handle is still attached
    pub fn is_active(&self) -> bool {
        self.detach.is_some()
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
