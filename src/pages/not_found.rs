use leptos::prelude::*;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    view! {
        <section class="not-found-page">
            <h1>"404"</h1>
            <p>"Không tìm thấy trang"</p>
            <button class="btn btn-primary" on:click=move |_| ctx.navigate(Route::Home)>
                "Về trang chủ"
            </button>
        </section>
    }
}
