//! # Session storage — small client state that outlives a page view
//!
//! [`Session`] is the handle the rest of the workspace uses to persist the
//! signed-in user and the bearer token. All reads and writes go through the
//! [`SessionStore`] trait, so the same logic works against the browser's
//! `localStorage` ([`crate::local`]) on the web and a plain in-memory map
//! ([`crate::memory`]) in tests and native builds.
//!
//! ## Error handling
//!
//! Storage is best-effort. A backend that cannot read returns `None`, a backend
//! that cannot write drops the value, and [`Session::get_json`] treats
//! unparseable JSON as absent. Callers never see a storage error; a broken or
//! tampered-with store behaves like an empty one.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Interface for string key-value persistence.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Cheap-to-clone handle to a [`SessionStore`] with JSON helpers.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.store.get(key)
    }

    pub fn set(&self, key: &str, value: &str) {
        self.store.set(key, value);
    }

    pub fn remove(&self, key: &str) {
        self.store.remove(key);
    }

    /// Read and deserialize a JSON entry. Missing or malformed entries are `None`.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        serde_json::from_str(&raw).ok()
    }

    /// Serialize and store a JSON entry. Values that fail to serialize are dropped.
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) {
        if let Ok(raw) = serde_json::to_string(value) {
            self.store.set(key, &raw);
        }
    }
}

// Two sessions are equal when they share the same backing store. Good enough
// for memoized component props.
impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.store, &other.store)
    }
}
