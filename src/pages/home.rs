//! Home page listing published posts.

use leptos::prelude::*;

use crate::components::loading::Loading;
use crate::components::post_card::PostCard;
use crate::net::api::ApiClient;
use crate::util::auth::use_auth;

#[component]
pub fn HomePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let posts = LocalResource::new(move || {
        let api = api.clone();
        async move { api.fetch_posts().await }
    });

    let auth = use_auth();
    Effect::new(move |_| {
        if let Some(Err(e)) = posts.get() {
            auth.expire_on(&e);
        }
    });

    view! {
        <section class="page home-page">
            <h1>"Latest posts"</h1>
            <Suspense fallback=move || view! { <Loading label="Loading posts..."/> }>
                {move || {
                    posts
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="home-page__empty">"No posts yet."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <div class="home-page__list">
                                        {list
                                            .into_iter()
                                            .map(|post| view! { <PostCard post=post/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! { <p class="error">{format!("Could not load posts: {}", e.user_message())}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}
