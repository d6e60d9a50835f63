//! Browser `localStorage` helpers for the persisted auth session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider client keeps its session here between page loads. Off the
//! browser every read misses and every write is dropped, so server rendering
//! always starts from "no session". Unit tests get a per-thread in-memory
//! store instead so session lifecycle rules can be checked natively.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Load a JSON value stored under `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = read(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::warn!("discarding unreadable {key}: {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
            remove(key);
            None
        }
    }
}

/// Save a JSON value under `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    write(key, &raw);
}

/// Remove the value stored under `key`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(all(test, not(feature = "hydrate")))]
    memory::remove(key);
    #[cfg(not(any(test, feature = "hydrate")))]
    let _ = key;
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn read(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(all(test, not(feature = "hydrate")))]
    {
        memory::get(key)
    }
    #[cfg(not(any(test, feature = "hydrate")))]
    {
        let _ = key;
        None
    }
}

fn write(key: &str, raw: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, raw);
        }
    }
    #[cfg(all(test, not(feature = "hydrate")))]
    memory::set(key, raw);
    #[cfg(not(any(test, feature = "hydrate")))]
    let _ = (key, raw);
}

#[cfg(all(test, not(feature = "hydrate")))]
pub(crate) mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static ENTRIES: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub(crate) fn get(key: &str) -> Option<String> {
        ENTRIES.with(|entries| entries.borrow().get(key).cloned())
    }

    pub(crate) fn set(key: &str, raw: &str) {
        ENTRIES.with(|entries| entries.borrow_mut().insert(key.to_owned(), raw.to_owned()));
    }

    pub(crate) fn remove(key: &str) {
        ENTRIES.with(|entries| entries.borrow_mut().remove(key));
    }
}
