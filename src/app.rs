//! Bookstore Admin App
//!
//! Root component: route guard, admin layout and the screen per route.

use admin_client::ClientConfig;
use leptos::ev;
use leptos::prelude::*;

use crate::components::{Sidebar, ToastHost};
use crate::context::AppContext;
use crate::pages::{
    BookPage, CategoryPage, HomePage, ImagePage, NotFoundPage, OrderPage, SignInPage, SpecificationPage,
};
use crate::routes::Route;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(ClientConfig::from_build_env());

    // Provide context to all children
    provide_context(ctx);
    provide_context(ctx.toasts);

    // Back/forward buttons
    let _ = window_event_listener(ev::popstate, move |_| ctx.sync_route());

    // Route guard: protected screens need a session, sign-in needs none
    Effect::new(move |_| {
        let route = ctx.route.get();
        let authenticated = ctx.authenticated.get();
        if route.is_protected() && !authenticated {
            ctx.require_sign_in(route);
        } else if route == Route::SignIn && authenticated {
            ctx.navigate(Route::Home);
        }
    });

    view! {
        <ToastHost />
        {move || {
            let route = ctx.route.get();
            match route {
                Route::SignIn => view! { <SignInPage /> }.into_any(),
                Route::NotFound => view! { <NotFoundPage /> }.into_any(),
                _ if !ctx.authenticated.get() => view! { <div class="redirecting"></div> }.into_any(),
                _ => view! { <AdminLayout route=route /> }.into_any(),
            }
        }}
    }
}

#[component]
fn AdminLayout(route: Route) -> impl IntoView {
    let screen = match route {
        Route::Home => view! { <HomePage /> }.into_any(),
        Route::Category => view! { <CategoryPage /> }.into_any(),
        Route::Order => view! { <OrderPage /> }.into_any(),
        Route::Book => view! { <BookPage /> }.into_any(),
        Route::Specification => view! { <SpecificationPage /> }.into_any(),
        Route::Image => view! { <ImagePage /> }.into_any(),
        Route::SignIn | Route::NotFound => view! { <NotFoundPage /> }.into_any(),
    };

    view! {
        <div class="admin-layout">
            <Sidebar current=route />
            <main class="admin-content">
                <nav class="breadcrumb">
                    <span>"Trang chủ"</span>
                    <span class="breadcrumb-sep">"/"</span>
                    <span class="breadcrumb-current">{route.title()}</span>
                </nav>
                {screen}
            </main>
        </div>
    }
}
