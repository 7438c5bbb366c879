//! Scoped activity listeners.
//!
//! A listener stays installed exactly as long as its [`ActivitySubscription`]
//! is alive, so listeners cannot pile up across sessions.

use std::sync::{Arc, Mutex, MutexGuard, Weak};

/// Passive user input that only counts as "still here".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    PointerMove,
    KeyPress,
    Click,
}

type Listener = Arc<dyn Fn(ActivityKind) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Fan-out point for raw activity signals coming from the host.
#[derive(Clone, Default)]
pub struct ActivityHub {
    listeners: Arc<Mutex<Listeners>>,
}

impl ActivityHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `listener` until the returned subscription is dropped.
    #[must_use = "dropping the subscription removes the listener immediately"]
    pub fn subscribe(
        &self,
        listener: impl Fn(ActivityKind) + Send + Sync + 'static,
    ) -> ActivitySubscription {
        let mut listeners = lock(&self.listeners);
        listeners.next_id += 1;
        let id = listeners.next_id;
        listeners.entries.push((id, Arc::new(listener)));
        ActivitySubscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    /// Notify every installed listener. Returns how many were notified.
    pub fn emit(&self, kind: ActivityKind) -> usize {
        // Listeners run outside the lock so they may subscribe or unsubscribe.
        let current: Vec<Listener> = lock(&self.listeners)
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in &current {
            listener(kind);
        }
        current.len()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).entries.len()
    }
}

/// Keeps one listener installed; dropping it removes the listener.
#[derive(Debug)]
pub struct ActivitySubscription {
    id: u64,
    listeners: Weak<Mutex<Listeners>>,
}

impl Drop for ActivitySubscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            lock(&listeners).entries.retain(|(id, _)| *id != self.id);
        }
    }
}

fn lock(listeners: &Mutex<Listeners>) -> MutexGuard<'_, Listeners> {
    // A listener that panicked must not disable activity tracking for good.
    listeners
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}
