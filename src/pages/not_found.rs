//! Fallback page for unknown paths.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page not-found-page">
            <h1>"404"</h1>
            <p>"The page you requested does not exist."</p>
            <A href="/" {..} class="btn btn--primary">"Go home"</A>
        </section>
    }
}
