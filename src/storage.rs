//! Browser `localStorage` behind the session's key-value seam.

use admin_client::KeyValueStore;
use leptos::prelude::*;
use tracing::warn;

pub struct BrowserStore {
    storage: web_sys::Storage,
}

impl BrowserStore {
    /// `None` when the browser refuses storage (private mode, sandboxed iframe).
    pub fn open() -> Option<Self> {
        match window().local_storage() {
            Ok(Some(storage)) => Some(Self { storage }),
            Ok(None) => None,
            Err(e) => {
                warn!("localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            warn!("Failed to persist {}: {:?}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = self.storage.remove_item(key) {
            warn!("Failed to remove {}: {:?}", key, e);
        }
    }
}
