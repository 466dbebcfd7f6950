//! # localStorage session store — browser-side persistence
//!
//! [`LocalStore`] is the [`SessionStore`] implementation used on the **web
//! platform**. It keeps session state in `window.localStorage`, which survives
//! reloads and browser restarts and is scoped per origin.
//!
//! ## Handle management
//!
//! `LocalStore` is a zero-size struct that looks up `window.localStorage` on
//! every operation. This keeps it `Clone`-friendly and avoids holding JS
//! handles across awaits; the lookup is a cheap property access.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads, doing
//! nothing for writes). A browser with storage disabled, a full quota, or a
//! sandboxed iframe degrades to "not signed in" rather than crashing the UI.

use web_sys::Storage;

use crate::session::SessionStore;

/// localStorage-backed SessionStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
