//! Sign-in screen

use admin_client::auth::{self, SignInForm};
use admin_client::notify::messages;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crate::context::AppContext;

#[component]
pub fn SignInPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let form = RwSignal::new(SignInForm::new());
    let (pending, set_pending) = signal(false);
    let errors = move || form.with(|f| f.errors());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let mut checked = form.get_untracked();
        let result = checked.submit();
        form.set(checked);
        let Ok(payload) = result else {
            return;
        };

        set_pending.set(true);
        let services = ctx.services();
        spawn_local(async move {
            let outcome = auth::login(services.transport.as_ref(), &services.session, &payload).await;
            let _ = set_pending.try_set(false);
            match outcome {
                Ok(_) => ctx.signed_in(),
                Err(err) => {
                    warn!("Login for {} failed: {}", payload.email, err);
                    services.notifier.error(messages::LOGIN_FAILED);
                }
            }
        });
    };

    view! {
        <div class="sign-in-page">
            <form class="sign-in-card" on:submit=on_submit>
                <h2>"Đăng nhập"</h2>
                <label class="field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        autocomplete="username"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| {
                            let email = event_target_value(&ev);
                            form.update(|f| f.email = email);
                        }
                        on:blur=move |_| form.update(|f| f.email_touched = true)
                    />
                    {move || errors().email.map(|msg| view! { <small class="field-error">{msg}</small> })}
                </label>
                <label class="field">
                    <span>"Mật khẩu"</span>
                    <div class="password-input">
                        <input
                            type=move || if form.with(|f| f.show_password) { "text" } else { "password" }
                            autocomplete="current-password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| {
                                let password = event_target_value(&ev);
                                form.update(|f| f.password = password);
                            }
                            on:blur=move |_| form.update(|f| f.password_touched = true)
                        />
                        <button
                            type="button"
                            class="btn btn-link"
                            on:click=move |_| form.update(|f| f.show_password = !f.show_password)
                        >
                            {move || if form.with(|f| f.show_password) { "Ẩn" } else { "Hiện" }}
                        </button>
                    </div>
                    {move || errors().password.map(|msg| view! { <small class="field-error">{msg}</small> })}
                </label>
                <button
                    type="submit"
                    class="btn btn-primary btn-block"
                    disabled=move || pending.get() || !form.with(|f| f.can_submit())
                >
                    {move || if pending.get() { "Đang đăng nhập..." } else { "Đăng nhập" }}
                </button>
            </form>
        </div>
    }
}
