//! Book Picker Component
//!
//! `<select>` over the `Book/getall` lookup list used by the specification
//! and image forms.

use admin_client::models::Book;
use leptos::prelude::*;

#[component]
pub fn BookPicker(
    #[prop(into)] books: Signal<Vec<Book>>,
    #[prop(into)] selected: Signal<i64>,
    #[prop(into)] on_select: Callback<i64>,
) -> impl IntoView {
    view! {
        <select
            required
            on:change=move |ev| {
                if let Ok(book_id) = event_target_value(&ev).parse::<i64>() {
                    on_select.run(book_id);
                }
            }
        >
            <option value="0" disabled selected=move || selected.get() <= 0>
                "-- Chọn sách --"
            </option>
            <For
                each=move || books.get()
                key=|book| book.book_id
                children=move |book| {
                    let book_id = book.book_id;
                    view! {
                        <option value=book_id.to_string() selected=move || selected.get() == book_id>
                            {book.name}
                        </option>
                    }
                }
            />
        </select>
    }
}
