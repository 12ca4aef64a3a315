//! Single post view with markdown body.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::loading::Loading;
use crate::components::route_outlet::use_router;
use crate::net::api::ApiClient;
use crate::net::types::Post;
use crate::routing::Page;
use crate::util::auth::use_auth;
use crate::util::markdown;

#[component]
pub fn PostPage(#[prop(into)] id: String) -> impl IntoView {
    let api = expect_context::<ApiClient>();
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
        <section class="page post-page">
            <Suspense fallback=move || view! { <Loading label="Loading post..."/> }>
                {move || {
                    post.get()
                        .map(|result| match result {
                            Ok(post) => view! { <PostBody post=post/> }.into_any(),
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

#[component]
fn PostBody(post: Post) -> impl IntoView {
    let auth = use_auth();
    let edit_href = use_router().href(Page::EditPost, &[("id", post.id.as_str())]);
    let author_id = post.author_id.clone();
    let can_edit = move || auth.identity().is_some_and(|identity| identity.user_id == author_id);
    let html = markdown::render_markdown_html(&post.body);
    let meta = match &post.updated_at {
        Some(updated) => format!("{} · {} (edited {updated})", post.author_name, post.created_at),
        None => format!("{} · {}", post.author_name, post.created_at),
    };

    view! {
        <article class="post">
            <h1 class="post__title">{post.title}</h1>
            <p class="post__meta">{meta}</p>
            <Show when=can_edit>
                <A href=edit_href.clone() {..} class="btn">"Edit"</A>
            </Show>
            <div class="post__body markdown" inner_html=html></div>
        </article>
    }
}
