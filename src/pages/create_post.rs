//! New post page (protected).

use leptos::prelude::*;

use crate::components::post_form::PostForm;

#[component]
pub fn CreatePostPage() -> impl IntoView {
    view! {
        <section class="page create-post-page">
            <h1>"New post"</h1>
            <PostForm/>
        </section>
    }
}
