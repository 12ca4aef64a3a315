//! Account registration; signs the new user in on success.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::route_outlet::use_router;
use crate::net::api::ApiClient;
use crate::net::types::RegisterRequest;
use crate::state::navigation::PendingReturn;
use crate::util::auth::use_auth;
use crate::util::forms;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = use_auth();
    let router = use_router();
    let pending = expect_context::<RwSignal<PendingReturn>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let validated = forms::validate_registration_input(&name.get(), &email.get(), &password.get(), &confirm.get());
        let (name_value, email_value, password_value) = match validated {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        let api = api.clone();
        let router = router.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let request = RegisterRequest { name: name_value, email: email_value, password: password_value };
            match api.register(&request).await {
                Ok(identity) => {
                    let origin = pending.try_update(PendingReturn::take).flatten();
                    let target = router.landing_after_login(origin.as_deref());
                    auth.login(identity);
                    navigate(&target, NavigateOptions::default());
                }
                Err(e) => {
                    info.set(format!("Registration failed: {}", e.user_message()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <section class="page auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Name"
                        autocomplete="name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        placeholder="Password (8+ characters)"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        autocomplete="new-password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Create account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-links">
                    "Already registered? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </section>
    }
}
