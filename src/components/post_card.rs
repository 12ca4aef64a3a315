//! Summary card used in the post list.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::route_outlet::use_router;
use crate::net::types::PostSummary;
use crate::routing::Page;
use crate::util::markdown;

const EXCERPT_CHARS: usize = 180;

#[component]
pub fn PostCard(post: PostSummary) -> impl IntoView {
    let excerpt = markdown::excerpt(&post.excerpt, EXCERPT_CHARS);
    let href = use_router().href(Page::PostView, &[("id", post.id.as_str())]);
    view! {
        <article class="post-card">
            <h2 class="post-card__title">
                <A href=href>{post.title}</A>
            </h2>
            <p class="post-card__meta">{format!("{} · {}", post.author_name, post.created_at)}</p>
            <p class="post-card__excerpt">{excerpt}</p>
        </article>
    }
}
