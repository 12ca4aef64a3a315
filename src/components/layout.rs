//! Page chrome: header navigation and footer.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::ApiClient;
use crate::util::auth::use_auth;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let auth = use_auth();
    let api = expect_context::<ApiClient>();
    let busy = RwSignal::new(false);

    let on_logout = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            // The local session ends even if the API call fails.
            if let Err(e) = api.logout().await {
                log::warn!("logout request failed: {e}");
            }
            auth.logout();
            busy.set(false);
        });
    };

    view! {
        <div class="layout">
            <header class="layout__header">
                <A href="/" {..} class="layout__brand">"Quill"</A>
                <nav class="layout__nav">
                    <A href="/">"Home"</A>
                    <A href="/about">"About"</A>
                    <Show when=move || auth.is_authenticated()>
                        <A href="/create-post">"New post"</A>
                    </Show>
                </nav>
                <div class="layout__account">
                    <Show
                        when=move || auth.is_authenticated()
                        fallback=|| {
                            view! {
                                <A href="/login">"Sign in"</A>
                                <A href="/register">"Register"</A>
                            }
                        }
                    >
                        <span class="layout__user">
                            {move || auth.identity().map(|i| i.display_name).unwrap_or_default()}
                        </span>
                        <button class="btn" on:click=on_logout.clone() disabled=move || busy.get()>
                            "Sign out"
                        </button>
                    </Show>
                </div>
            </header>
            <main class="layout__main">{children()}</main>
            <footer class="layout__footer">"Quill"</footer>
        </div>
    }
}
