//! Email + password sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::route_outlet::use_router;
use crate::net::api::ApiClient;
use crate::net::types::LoginRequest;
use crate::state::navigation::PendingReturn;
use crate::util::auth::use_auth;
use crate::util::forms;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = use_auth();
    let router = use_router();
    let pending = expect_context::<RwSignal<PendingReturn>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match forms::validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let api = api.clone();
        let router = router.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let request = LoginRequest { email: email_value, password: password_value };
            match api.login(&request).await {
                Ok(identity) => {
                    let origin = pending.try_update(PendingReturn::take).flatten();
                    let target = router.landing_after_login(origin.as_deref());
                    auth.login(identity);
                    navigate(&target, NavigateOptions::default());
                }
                Err(e) => {
                    info.set(format!("Sign-in failed: {}", e.user_message()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <section class="page auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-links">
                    <A href="/forgot-password">"Forgot password?"</A>
                    " · "
                    <A href="/register">"Create an account"</A>
                </p>
            </div>
        </section>
    }
}
