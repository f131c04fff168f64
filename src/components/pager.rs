//! Pager Component
//!
//! First/previous/next/last, a sliding window of page buttons and a
//! go-to-page box. Pages are 0-based inside, 1-based on screen.

use admin_client::pagination::{jump_target, page_window, PagerEdges};
use leptos::prelude::*;

#[component]
pub fn Pager(
    #[prop(into)] current: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    window: usize,
    #[prop(into)] on_page: Callback<usize>,
) -> impl IntoView {
    let (jump, set_jump) = signal(1i64);
    let edges = move || PagerEdges::new(current.get(), total_pages.get());
    let buttons = move || {
        page_window(current.get(), total_pages.get(), window)
            .map(|pages| pages.collect::<Vec<_>>())
            .unwrap_or_default()
    };

    view! {
        <Show when=move || { total_pages.get() >= 1 }>
            <div class="pager">
                <span class="pager-info">
                    {move || format!(
                        "Trang {} / {} ({} dòng)",
                        current.get() + 1,
                        total_pages.get(),
                        total_count.get(),
                    )}
                </span>
                <div class="pager-buttons">
                    <button
                        class="btn btn-outline"
                        disabled=move || !edges().can_go_back
                        on:click=move |_| on_page.run(0)
                    >
                        "«"
                    </button>
                    <button
                        class="btn btn-outline"
                        disabled=move || !edges().can_go_back
                        on:click=move |_| on_page.run(current.get_untracked().saturating_sub(1))
                    >
                        "‹"
                    </button>
                    <For
                        each=buttons
                        key=|page| *page
                        children=move |page| {
                            view! {
                                <button
                                    class=move || {
                                        if current.get() == page { "btn btn-primary" } else { "btn btn-outline" }
                                    }
                                    on:click=move |_| on_page.run(page)
                                >
                                    {page + 1}
                                </button>
                            }
                        }
                    />
                    <button
                        class="btn btn-outline"
                        disabled=move || !edges().can_go_forward
                        on:click=move |_| on_page.run(current.get_untracked() + 1)
                    >
                        "›"
                    </button>
                    <button
                        class="btn btn-outline"
                        disabled=move || !edges().can_go_forward
                        on:click=move |_| on_page.run(total_pages.get_untracked().saturating_sub(1))
                    >
                        "»"
                    </button>
                </div>
                <div class="pager-jump">
                    <input
                        type="number"
                        min="1"
                        max=move || total_pages.get().to_string()
                        prop:value=move || jump.get().to_string()
                        on:input=move |ev| {
                            set_jump.set(event_target_value(&ev).trim().parse().unwrap_or(1));
                        }
                    />
                    <button
                        class="btn btn-primary"
                        on:click=move |_| {
                            let target = jump_target(jump.get_untracked(), total_pages.get_untracked());
                            set_jump.set(target as i64 + 1);
                            on_page.run(target);
                        }
                    >
                        "Đi"
                    </button>
                </div>
            </div>
        </Show>
    }
}
