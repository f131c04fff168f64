//! Book management

use admin_client::display::format_vnd;
use admin_client::models::Book;
use leptos::prelude::*;

use crate::components::table::{pager, select_all_cell, select_row_cell, status_row, toolbar};
use crate::components::Modal;
use crate::screen::{use_resource, ResourceHandle};

#[component]
pub fn BookPage() -> impl IntoView {
    let handle = use_resource::<Book>();

    let rows = move || {
        let state = handle.state.get();
        if state.items.is_empty() {
            return status_row(handle, 6).into_any();
        }
        state
            .items
            .iter()
            .enumerate()
            .map(|(index, book)| {
                let row = book.clone();
                view! {
                    <tr>
                        {select_row_cell(handle, book.book_id, state.selection.contains(&book.book_id))}
                        <td>{state.row_number(index)}</td>
                        <td>{book.name.clone()}</td>
                        <td class="col-description">{book.description.clone()}</td>
                        <td class="col-number">{format_vnd(book.price)}</td>
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
            {toolbar(handle, "Tìm sách...")}
            <table class="data-table">
                <thead>
                    <tr>
                        {select_all_cell(handle)}
                        <th>"STT"</th>
                        <th>"Tên sách"</th>
                        <th>"Mô tả"</th>
                        <th>"Giá"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            {pager(handle)}
            <Modal open=handle.modal_open() title=handle.modal_title("sách") on_close=move |_| handle.close_modal()>
                <BookForm handle=handle />
            </Modal>
        </section>
    }
}

#[component]
fn BookForm(handle: ResourceHandle<Book>) -> impl IntoView {
    view! {
        <form
            class="modal-form"
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                handle.submit();
            }
        >
            <label class="field">
                <span>"Tên sách"</span>
                <input
                    type="text"
                    required
                    prop:value=move || handle.draft_field(|b| b.name.clone())
                    on:input=move |ev| {
                        let name = event_target_value(&ev);
                        handle.edit(move |b| b.name = name);
                    }
                />
            </label>
            <label class="field">
                <span>"Mô tả"</span>
                <textarea
                    rows="4"
                    prop:value=move || handle.draft_field(|b| b.description.clone())
                    on:input=move |ev| {
                        let description = event_target_value(&ev);
                        handle.edit(move |b| b.description = description);
                    }
                ></textarea>
            </label>
            <label class="field">
                <span>"Giá (₫)"</span>
                <input
                    type="number"
                    min="0"
                    step="1000"
                    prop:value=move || handle.draft_field(|b| b.price.to_string())
                    on:input=move |ev| {
                        if let Ok(price) = event_target_value(&ev).trim().parse::<f64>() {
                            handle.edit(move |b| b.price = price);
                        }
                    }
                />
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
