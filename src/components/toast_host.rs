//! Toast Host Component
//!
//! Renders the toast store in a corner stack. Clicking a toast dismisses it.

use admin_client::ToastKind;
use leptos::prelude::*;

use crate::store::{store_remove_toast, store_toasts, use_toast_store};

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Error => "toast toast-error",
        ToastKind::Warning => "toast toast-warning",
        ToastKind::Loading => "toast toast-loading",
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_toast_store();

    view! {
        <div class="toast-host">
            <For
                each=move || store_toasts(&store)
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast_class(toast.kind) on:click=move |_| store_remove_toast(&store, id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
