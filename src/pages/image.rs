//! Book image management

use admin_client::models::{Book, BookImage};
use admin_client::Resource;
use leptos::prelude::*;

use crate::components::table::{pager, select_all_cell, select_row_cell, status_row, toolbar};
use crate::components::{BookPicker, Modal};
use crate::screen::{use_resource, ResourceHandle};

#[component]
pub fn ImagePage() -> impl IntoView {
    let handle = use_resource::<BookImage>();
    let books = RwSignal::new(Vec::<Book>::new());

    let modal_open = handle.modal_open();
    Effect::new(move |_| {
        if modal_open.get() {
            handle.load_lookup(Book::PATH, books);
        }
    });

    let rows = move || {
        let state = handle.state.get();
        if state.items.is_empty() {
            return status_row(handle, 6).into_any();
        }
        state
            .items
            .iter()
            .enumerate()
            .map(|(index, image)| {
                let row = image.clone();
                let preview = if image.thumbnail_url.is_empty() {
                    image.base_url.clone()
                } else {
                    image.thumbnail_url.clone()
                };
                view! {
                    <tr>
                        {select_row_cell(handle, image.image_id, state.selection.contains(&image.image_id))}
                        <td>{state.row_number(index)}</td>
                        <td><img class="thumb" src=preview alt=image.book.name.clone() /></td>
                        <td>{image.book.name.clone()}</td>
                        <td>
                            {image.is_gallery.then(|| view! { <span class="badge badge-info">"Gallery"</span> })}
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
            {toolbar(handle, "Tìm hình ảnh...")}
            <table class="data-table">
                <thead>
                    <tr>
                        {select_all_cell(handle)}
                        <th>"STT"</th>
                        <th>"Ảnh"</th>
                        <th>"Sách"</th>
                        <th>"Gallery"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            {pager(handle)}
            <Modal open=modal_open title=handle.modal_title("hình ảnh") on_close=move |_| handle.close_modal()>
                <ImageForm handle=handle books=books />
            </Modal>
        </section>
    }
}

#[component]
fn ImageForm(handle: ResourceHandle<BookImage>, books: RwSignal<Vec<Book>>) -> impl IntoView {
    let url_field = move |label: &'static str, read: fn(&BookImage) -> String, write: fn(&mut BookImage, String)| {
        view! {
            <label class="field">
                <span>{label}</span>
                <input
                    type="url"
                    prop:value=move || handle.draft_field(read)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        handle.edit(move |image| write(image, value));
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
                    selected=Signal::derive(move || handle.draft_field(|image| image.book_id))
                    on_select=move |book_id| handle.edit(move |image| image.book_id = book_id)
                />
            </label>
            {url_field("Ảnh gốc", |i| i.base_url.clone(), |i, v| i.base_url = v)}
            {url_field("Ảnh nhỏ", |i| i.small_url.clone(), |i, v| i.small_url = v)}
            {url_field("Ảnh vừa", |i| i.medium_url.clone(), |i, v| i.medium_url = v)}
            {url_field("Ảnh lớn", |i| i.large_url.clone(), |i, v| i.large_url = v)}
            {url_field("Ảnh thu nhỏ", |i| i.thumbnail_url.clone(), |i, v| i.thumbnail_url = v)}
            <label class="field checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || handle.draft_field(|image| image.is_gallery)
                    on:change=move |ev| {
                        let is_gallery = event_target_checked(&ev);
                        handle.edit(move |image| image.is_gallery = is_gallery);
                    }
                />
                <span>"Hiển thị trong gallery"</span>
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
