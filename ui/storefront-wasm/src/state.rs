//! Client-local persistence.
//!
//! The theme only ever stores raw strings (`"dark"`, `"light"`), so the store
//! is a plain string map. `LocalStore` talks to `localStorage` directly so
//! values stay unquoted. The handle can be missing (private browsing,
//! sandboxed iframes); reads then find nothing and writes fail with
//! `StorefrontError::Storage`.

use crate::error::{Result, StorefrontError};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

#[derive(Clone, Debug, Default)]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage unavailable, theme will not persist");
        }
        LocalStore { storage }
    }

    /// A store with no backing handle.
    pub fn unavailable() -> Self {
        LocalStore { storage: None }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| StorefrontError::Storage("localStorage unavailable".to_owned()))?;
        storage
            .set_item(key, value)
            .map_err(|e| StorefrontError::Storage(format!("{:?}", e)))
    }
}

#[cfg(test)]
pub use memory::MemoryStore;
