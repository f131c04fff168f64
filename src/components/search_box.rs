//! Search Box Component

use leptos::prelude::*;

/// Keyword input with clear and submit buttons.
///
/// Every keystroke goes to `on_input` (debounced by the screen); Enter and
/// the clear button go to `on_submit` immediately.
#[component]
pub fn SearchBox(
    #[prop(into)] value: Signal<String>,
    placeholder: &'static str,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] on_submit: Callback<String>,
) -> impl IntoView {
    view! {
        <form
            class="search-box"
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(value.get_untracked());
            }
        >
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    type="button"
                    class="search-clear"
                    on:click=move |_| on_submit.run(String::new())
                >
                    "×"
                </button>
            </Show>
            <button type="submit" class="search-submit">"Tìm"</button>
        </form>
    }
}
