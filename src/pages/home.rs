//! Landing screen after sign-in

use leptos::prelude::*;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let greeting = match ctx.user() {
        Some(user) if !user.name.is_empty() => format!("Xin chào, {}", user.name),
        _ => "Xin chào".to_string(),
    };

    view! {
        <section class="home-page">
            <h2>{greeting}</h2>
            <div class="home-shortcuts">
                {Route::MENU
                    .into_iter()
                    .filter(|route| *route != Route::Home)
                    .map(|route| view! {
                        <button class="shortcut-card" on:click=move |_| ctx.navigate(route)>
                            {route.title()}
                        </button>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
