//! Table pieces shared by the resource pages.

use admin_client::Resource;
use leptos::prelude::*;

use super::{BulkDeleteButton, Pager, SearchBox};
use crate::screen::ResourceHandle;

/// Header checkbox selecting every row of the page
pub fn select_all_cell<E: Resource>(handle: ResourceHandle<E>) -> impl IntoView {
    view! {
        <th class="col-check">
            <input
                type="checkbox"
                prop:checked=move || handle.state.with(|s| s.all_selected())
                on:change=move |_| handle.toggle_all()
            />
        </th>
    }
}

pub fn select_row_cell<E: Resource>(handle: ResourceHandle<E>, id: i64, checked: bool) -> impl IntoView {
    view! {
        <td class="col-check">
            <input type="checkbox" prop:checked=checked on:change=move |_| handle.toggle_selected(id) />
        </td>
    }
}

/// Placeholder row for an empty or still loading list
pub fn status_row<E: Resource>(handle: ResourceHandle<E>, columns: usize) -> impl IntoView {
    let text = move || {
        handle.state.with(|s| if s.is_loading() { "Đang tải..." } else { "Không có dữ liệu" })
    };
    view! {
        <tr class="status-row">
            <td colspan=columns.to_string()>{text}</td>
        </tr>
    }
}

/// Create / delete actions and the search box above a table
pub fn toolbar<E: Resource>(handle: ResourceHandle<E>, search_placeholder: &'static str) -> impl IntoView {
    view! {
        <div class="table-toolbar">
            <div class="table-actions">
                {E::CAN_CREATE.then(|| view! {
                    <button class="btn btn-primary" on:click=move |_| handle.open_create()>
                        "Thêm mới"
                    </button>
                })}
                {E::CAN_DELETE.then(|| view! {
                    <BulkDeleteButton
                        selected=handle.selected_count()
                        on_delete=move |confirmed| handle.delete_selected(confirmed)
                    />
                })}
            </div>
            <SearchBox
                value=handle.search_input()
                placeholder=search_placeholder
                on_input=move |keyword| handle.search(keyword)
                on_submit=move |keyword| handle.search_now(keyword)
            />
        </div>
    }
}

pub fn pager<E: Resource>(handle: ResourceHandle<E>) -> impl IntoView {
    view! {
        <Pager
            current=Signal::derive(move || handle.state.with(|s| s.query.page))
            total_pages=Signal::derive(move || handle.state.with(|s| s.total_pages))
            total_count=Signal::derive(move || handle.state.with(|s| s.total_count))
            window=handle.page_window
            on_page=move |page| handle.set_page(page)
        />
    }
}
