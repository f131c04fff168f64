//! Book specification management

use admin_client::models::{Book, Specification};
use admin_client::Resource;
use leptos::prelude::*;

use crate::components::table::{pager, select_all_cell, select_row_cell, status_row, toolbar};
use crate::components::{BookPicker, Modal};
use crate::screen::{use_resource, ResourceHandle};

#[component]
pub fn SpecificationPage() -> impl IntoView {
    let handle = use_resource::<Specification>();
    let books = RwSignal::new(Vec::<Book>::new());

    // Refresh the picker every time the dialog opens.
    let modal_open = handle.modal_open();
    Effect::new(move |_| {
        if modal_open.get() {
            handle.load_lookup(Book::PATH, books);
        }
    });

    let rows = move || {
        let state = handle.state.get();
        if state.items.is_empty() {
            return status_row(handle, 7).into_any();
        }
        state
            .items
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                let row = spec.clone();
                view! {
                    <tr>
                        {select_row_cell(handle, spec.id, state.selection.contains(&spec.id))}
                        <td>{state.row_number(index)}</td>
                        <td>{spec.book.name.clone()}</td>
                        <td><code>{spec.spec_code.clone()}</code></td>
                        <td>{spec.spec_name.clone()}</td>
                        <td>{spec.spec_value.clone()}</td>
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
            {toolbar(handle, "Tìm thông số...")}
            <table class="data-table">
                <thead>
                    <tr>
                        {select_all_cell(handle)}
                        <th>"STT"</th>
                        <th>"Sách"</th>
                        <th>"Mã"</th>
                        <th>"Tên thông số"</th>
                        <th>"Giá trị"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            {pager(handle)}
            <Modal open=modal_open title=handle.modal_title("thông số") on_close=move |_| handle.close_modal()>
                <SpecificationForm handle=handle books=books />
            </Modal>
        </section>
    }
}

#[component]
fn SpecificationForm(handle: ResourceHandle<Specification>, books: RwSignal<Vec<Book>>) -> impl IntoView {
    let text_field = move |label: &'static str, read: fn(&Specification) -> String, write: fn(&mut Specification, String)| {
        view! {
            <label class="field">
                <span>{label}</span>
                <input
                    type="text"
                    required
                    prop:value=move || handle.draft_field(read)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        handle.edit(move |spec| write(spec, value));
                    }
                />
            </label>
        }
    };

    view! {
        <form
            class="modal-form"
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                handle.submit();
            }
        >
            <label class="field">
                <span>"Sách"</span>
                <BookPicker
                    books=books
                    selected=Signal::derive(move || handle.draft_field(|spec| spec.book_id))
                    on_select=move |book_id| handle.edit(move |spec| spec.book_id = book_id)
                />
            </label>
            {text_field("Mã thông số", |spec| spec.spec_code.clone(), |spec, v| spec.spec_code = v)}
            {text_field("Tên thông số", |spec| spec.spec_name.clone(), |spec, v| spec.spec_name = v)}
            {text_field("Giá trị", |spec| spec.spec_value.clone(), |spec, v| spec.spec_value = v)}
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
