//! Bulk Delete Button Component
//!
//! Inline confirmation for deleting the selected rows of a table.

use admin_client::notify::messages;
use leptos::prelude::*;

/// Inline bulk delete button
///
/// Shows "Xóa" initially. When clicked with rows selected, asks for
/// confirmation with ✓/✗ buttons.
///
/// # Arguments
/// * `selected` - Number of selected rows
/// * `on_delete` - Called with `true` once confirmed; with `false` straight
///   away when nothing is selected so the screen can warn
#[component]
pub fn BulkDeleteButton(
    #[prop(into)] selected: Signal<usize>,
    #[prop(into)] on_delete: Callback<bool>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                class="btn btn-danger"
                on:click=move |ev| {
                    ev.stop_propagation();
                    if selected.get_untracked() == 0 {
                        on_delete.run(false);
                    } else {
                        set_confirm_delete.set(true);
                    }
                }
            >
                "Xóa"
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">
                    {move || messages::confirm_delete(selected.get())}
                </span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                        on_delete.run(true);
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
