//! Password-recovery request: emails a reset link.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::ApiClient;
use crate::net::types::ForgotPasswordRequest;
use crate::util::forms;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match forms::validate_email_input(&email.get()) {
            Ok(value) => value,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Sending reset link...".to_owned());

        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.request_password_reset(&ForgotPasswordRequest { email: email_value }).await {
                // Same message whether or not the address has an account.
                Ok(()) => info.set("If that address has an account, a reset link is on its way.".to_owned()),
                Err(e) => info.set(format!("Request failed: {}", e.user_message())),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="page auth-page">
            <div class="auth-card">
                <h1>"Forgot password"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Send reset link"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-links">
                    <A href="/login">"Back to sign in"</A>
                </p>
            </div>
        </section>
    }
}
