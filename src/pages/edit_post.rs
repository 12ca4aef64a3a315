//! Edit page for an existing post (protected).

use leptos::prelude::*;

use crate::components::loading::Loading;
use crate::components::post_form::PostForm;
use crate::net::api::ApiClient;
use crate::net::types::PostDraft;
use crate::util::auth::use_auth;

#[component]
pub fn EditPostPage(#[prop(into)] id: String) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let post_id = id.clone();
    let post = LocalResource::new(move || {
        let api = api.clone();
        let id = id.clone();
        async move { api.fetch_post(&id).await }
    });

    let auth = use_auth();
    Effect::new(move |_| {
        if let Some(Err(e)) = post.get() {
            auth.expire_on(&e);
        }
    });

    view! {
        <section class="page edit-post-page">
            <h1>"Edit post"</h1>
            <Suspense fallback=move || view! { <Loading label="Loading post..."/> }>
                {move || {
                    let post_id = post_id.clone();
                    post.get()
                        .map(|result| match result {
                            Ok(post) => {
                                view! { <PostForm post_id=post_id initial=PostDraft::from(&post)/> }.into_any()
                            }
                            Err(e) => {
                                view! { <p class="error">{format!("Could not load post: {}", e.user_message())}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}
