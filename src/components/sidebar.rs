//! Sidebar Component
//!
//! Menu of the admin screens plus the signed-in user and sign-out.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn Sidebar(current: Route) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let user_name = ctx.user().map(|u| u.name).unwrap_or_default();

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">"Bookstore Admin"</div>
            <nav class="sidebar-menu">
                {Route::MENU
                    .into_iter()
                    .map(|route| {
                        let class = if route == current { "menu-item active" } else { "menu-item" };
                        view! {
                            <a
                                class=class
                                href=route.path()
                                on:click=move |ev: web_sys::MouseEvent| {
                                    ev.prevent_default();
                                    ctx.navigate(route);
                                }
                            >
                                {route.title()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="sidebar-user">
                <span class="user-name">{user_name}</span>
                <button class="btn btn-outline" on:click=move |_| ctx.sign_out()>
                    "Đăng xuất"
                </button>
            </div>
        </aside>
    }
}
