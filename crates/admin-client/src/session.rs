//! Session
//!
//! The signed-in user and their bearer token, persisted in a key-value store
//! under fixed keys. One `Session` is built at the composition root and
//! handed to the transport and to the views.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Storage key of the bearer token
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Storage key of the signed-in user (JSON)
pub const USER_KEY: &str = "user";

/// Minimal string store; `localStorage` in the browser.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store for tests and for browsers with storage disabled.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// User snapshot returned by the login endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionUser {
    #[serde(alias = "id")]
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub role: Option<String>,
}

/// Handle over the persisted credentials.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn KeyValueStore>,
}

impl Session {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Session backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStore::new()))
    }

    pub fn access_token(&self) -> Option<String> {
        self.store.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// Stored user, if any. A corrupt entry reads as no user.
    pub fn user(&self) -> Option<SessionUser> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Ignoring unreadable stored user: {}", e);
                None
            }
        }
    }

    /// Persist credentials after a successful login.
    pub fn establish(&self, token: &str, user: &SessionUser) {
        self.store.set(ACCESS_TOKEN_KEY, token);
        match serde_json::to_string(user) {
            Ok(json) => self.store.set(USER_KEY, &json),
            Err(e) => warn!("Could not persist user: {}", e),
        }
        debug!("Session established for {}", user.email);
    }

    /// Forget both keys.
    pub fn clear(&self) {
        self.store.remove(ACCESS_TOKEN_KEY);
        self.store.remove(USER_KEY);
        debug!("Session cleared");
    }
}
