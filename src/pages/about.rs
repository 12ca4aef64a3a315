//! Static informational page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page about-page">
            <h1>"About Quill"</h1>
            <p>
                "Quill is a small blog. Anyone can read posts; sign in to write and edit your own."
            </p>
        </section>
    }
}
