//! Auth-state change subscriptions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client emits an [`AuthEvent`] after every session change it
//! causes (sign-in, sign-out, refresh, initial load). The auth hook
//! subscribes once for the lifetime of the component tree and replaces its
//! user snapshot on each event.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::types::{AuthEvent, Session};

pub type AuthCallback = Arc<dyn Fn(AuthEvent, Option<&Session>) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<(u64, AuthCallback)>,
}

/// Shared callback registry. Cloning shares the same registry.
#[derive(Clone, Default)]
pub struct AuthListeners {
    inner: Arc<Mutex<Registry>>,
}

impl AuthListeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register `callback`; it stays live until the returned handle is
    /// unsubscribed.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(AuthEvent, Option<&Session>) + Send + Sync + 'static,
    {
        let mut registry = self.registry();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push((id, Arc::new(callback)));
        Subscription { id, registry: Some(Arc::downgrade(&self.inner)) }
    }

    /// Invoke every live callback in subscription order.
    pub fn emit(&self, event: AuthEvent, session: Option<&Session>) {
        // Snapshot first so callbacks may subscribe/unsubscribe re-entrantly.
        let callbacks: Vec<AuthCallback> = self.registry().entries.iter().map(|(_, cb)| cb.clone()).collect();
        for callback in callbacks {
            callback(event, session);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registry().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for AuthListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthListeners").field("len", &self.len()).finish()
    }
}

/// Handle returned by [`AuthListeners::subscribe`].
///
/// Dropping the handle leaves the callback registered; call
/// [`Subscription::unsubscribe`] to remove it.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Option<std::sync::Weak<Mutex<Registry>>>,
}

impl Subscription {
    /// A handle that is not attached to any registry.
    #[must_use]
    pub fn inert() -> Self {
        Self { id: 0, registry: None }
    }

    pub fn unsubscribe(self) {
        let Some(registry) = self.registry.and_then(|weak| weak.upgrade()) else {
            return;
        };
        let mut registry = registry.lock().unwrap_or_else(PoisonError::into_inner);
        registry.entries.retain(|(id, _)| *id != self.id);
    }
}
