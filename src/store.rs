//! Toast Store
//!
//! Uses Leptos reactive_stores so the toast list re-renders per field.

use std::time::Duration;

use admin_client::{Notifier, ToastId, ToastKind};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
}

/// Toasts currently on screen
#[derive(Clone, Debug, Default, Store)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    /// Last id handed out
    pub last_id: ToastId,
}

/// Type alias for the store
pub type ToastStore = Store<ToastState>;

/// Get the toast store from context
pub fn use_toast_store() -> ToastStore {
    expect_context::<ToastStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_push_toast(store: &ToastStore, kind: ToastKind, message: &str) -> ToastId {
    let id = {
        let last_id = store.last_id();
        let mut last = last_id.write();
        *last += 1;
        *last
    };
    store.toasts().write().push(Toast {
        id,
        kind,
        message: message.to_string(),
    });
    id
}

pub fn store_remove_toast(store: &ToastStore, id: ToastId) {
    store.toasts().write().retain(|toast| toast.id != id);
}

pub fn store_toasts(store: &ToastStore) -> Vec<Toast> {
    store.toasts().get()
}

/// [`Notifier`] drawing into the toast store. Non-sticky toasts expire after
/// `lifetime`.
pub struct ToastNotifier {
    store: ToastStore,
    lifetime: Duration,
}

impl ToastNotifier {
    pub fn new(store: ToastStore, lifetime: Duration) -> Self {
        Self { store, lifetime }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, kind: ToastKind, message: &str) -> ToastId {
        let id = store_push_toast(&self.store, kind, message);
        if !kind.is_sticky() {
            let store = self.store;
            let millis = u32::try_from(self.lifetime.as_millis()).unwrap_or(u32::MAX);
            spawn_local(async move {
                TimeoutFuture::new(millis).await;
                store_remove_toast(&store, id);
            });
        }
        id
    }

    fn dismiss(&self, id: ToastId) {
        store_remove_toast(&self.store, id);
    }
}
