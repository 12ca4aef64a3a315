//! Password-recovery confirmation, reached from the emailed link.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::ApiClient;
use crate::net::types::ResetPasswordRequest;
use crate::util::forms;

#[component]
pub fn ResetPasswordPage(#[prop(into)] token: String) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || done.get() {
            return;
        }
        let password_value = match forms::validate_new_password(&password.get(), &confirm.get()) {
            Ok(value) => value,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Updating password...".to_owned());

        let api = api.clone();
        let token = token.clone();
        leptos::task::spawn_local(async move {
            match api.reset_password(&token, &ResetPasswordRequest { password: password_value }).await {
                Ok(()) => {
                    done.set(true);
                    info.set("Password updated. You can sign in now.".to_owned());
                }
                Err(e) => info.set(format!("Reset failed: {}", e.user_message())),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="page auth-page">
            <div class="auth-card">
                <h1>"Choose a new password"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="New password (8+ characters)"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm new password"
                        autocomplete="new-password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get() || done.get()>
                        "Update password"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <Show when=move || done.get()>
                    <A href="/login" {..} class="btn">"Sign in"</A>
                </Show>
            </div>
        </section>
    }
}
