//! Category management

use admin_client::models::Category;
use leptos::prelude::*;

use crate::components::table::{pager, select_all_cell, select_row_cell, status_row, toolbar};
use crate::components::Modal;
use crate::screen::{use_resource, ResourceHandle};

/// Badge class and label of the leaf flag
fn leaf_badge(is_leaf: bool) -> (&'static str, &'static str) {
    if is_leaf {
        ("badge badge-success", "Danh mục lá")
    } else {
        ("badge badge-light", "Danh mục cha")
    }
}

#[component]
pub fn CategoryPage() -> impl IntoView {
    let handle = use_resource::<Category>();

    let rows = move || {
        let state = handle.state.get();
        if state.items.is_empty() {
            return status_row(handle, 5).into_any();
        }
        state
            .items
            .iter()
            .enumerate()
            .map(|(index, category)| {
                let row = category.clone();
                let (badge, label) = leaf_badge(category.is_leaf);
                view! {
                    <tr>
                        {select_row_cell(handle, category.id, state.selection.contains(&category.id))}
                        <td>{state.row_number(index)}</td>
                        <td>{category.name.clone()}</td>
                        <td>
                            <span class=badge>{label}</span>
                        </td>
                        <td>
                            <button class="btn btn-link" on:click=move |_| handle.open_edit(&row)>
                                "Sửa"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="resource-page">
            {toolbar(handle, "Tìm danh mục...")}
            <table class="data-table">
                <thead>
                    <tr>
                        {select_all_cell(handle)}
                        <th>"STT"</th>
                        <th>"Tên danh mục"</th>
                        <th>"Loại"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            {pager(handle)}
            <Modal
                open=handle.modal_open()
                title=handle.modal_title("danh mục")
                on_close=move |_| handle.close_modal()
            >
                <CategoryForm handle=handle />
            </Modal>
        </section>
    }
}

#[component]
fn CategoryForm(handle: ResourceHandle<Category>) -> impl IntoView {
    view! {
        <form
            class="modal-form"
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                handle.submit();
            }
        >
            <label class="field">
                <span>"Tên danh mục"</span>
                <input
                    type="text"
                    required
                    prop:value=move || handle.draft_field(|c| c.name.clone())
                    on:input=move |ev| {
                        let name = event_target_value(&ev);
                        handle.edit(move |c| c.name = name);
                    }
                />
            </label>
            <label class="field checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || handle.draft_field(|c| c.is_leaf)
                    on:change=move |ev| {
                        let is_leaf = event_target_checked(&ev);
                        handle.edit(move |c| c.is_leaf = is_leaf);
                    }
                />
                <span>"Danh mục lá"</span>
            </label>
            <div class="modal-actions">
                <button type="button" class="btn btn-outline" on:click=move |_| handle.close_modal()>
                    "Hủy"
                </button>
                <button type="submit" class="btn btn-primary" disabled=move || handle.is_submitting()>
                    "Lưu"
                </button>
            </div>
        </form>
    }
}
