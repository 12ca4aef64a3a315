//! Title + markdown body editor shared by the create and edit pages.
//!
//! Unsaved edits are mirrored to localStorage under a per-post key while they
//! differ from the saved post, and cleared once the API accepts the post.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::route_outlet::use_router;
use crate::net::api::ApiClient;
use crate::net::types::PostDraft;
use crate::routing::Page;
use crate::util::auth::use_auth;
use crate::util::{forms, markdown, storage};

#[component]
pub fn PostForm(
    /// Post being edited; `None` creates a new post.
    #[prop(optional, into)]
    post_id: Option<String>,
    /// Starting content when no local draft exists.
    #[prop(optional)]
    initial: PostDraft,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = use_auth();
    let router = use_router();
    let navigate = use_navigate();

    let draft_key = storage::draft_key(post_id.as_deref());
    let start = storage::load_json::<PostDraft>(&draft_key)
        .filter(|stored| storage::draft_has_edits(stored, &initial))
        .unwrap_or_else(|| initial.clone());

    let title = RwSignal::new(start.title);
    let body = RwSignal::new(start.body);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let preview = RwSignal::new(false);

    let save_key = draft_key.clone();
    Effect::new(move |_| {
        let draft = PostDraft { title: title.get(), body: body.get() };
        storage::sync_draft(&save_key, &draft, &initial);
    });

    let is_edit = post_id.is_some();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let draft = match forms::validate_post_input(&title.get(), &body.get()) {
            Ok(draft) => draft,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(if is_edit { "Saving..." } else { "Publishing..." }.to_owned());

        let api = api.clone();
        let router = router.clone();
        let navigate = navigate.clone();
        let post_id = post_id.clone();
        let draft_key = draft_key.clone();
        leptos::task::spawn_local(async move {
            let result = match post_id.as_deref() {
                Some(id) => api.update_post(id, &draft).await,
                None => api.create_post(&draft).await,
            };
            match result {
                Ok(post) => {
                    storage::remove(&draft_key);
                    navigate(&router.href(Page::PostView, &[("id", post.id.as_str())]), NavigateOptions::default());
                }
                Err(e) => {
                    info.set(format!("Could not save post: {}", e.user_message()));
                    busy.set(false);
                    auth.expire_on(&e);
                }
            }
        });
    };

    view! {
        <form class="post-form" on:submit=on_submit>
            <input
                class="post-form__title"
                type="text"
                placeholder="Title"
                maxlength=forms::MAX_TITLE_LEN.to_string()
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <div class="post-form__tabs">
                <button type="button" class="btn" on:click=move |_| preview.set(false)>"Write"</button>
                <button type="button" class="btn" on:click=move |_| preview.set(true)>"Preview"</button>
            </div>
            <Show
                when=move || preview.get()
                fallback=move || {
                    view! {
                        <textarea
                            class="post-form__body"
                            rows="18"
                            placeholder="Write in markdown..."
                            prop:value=move || body.get()
                            on:input=move |ev| body.set(event_target_value(&ev))
                        ></textarea>
                    }
                }
            >
                <div class="post-form__preview markdown" inner_html=move || markdown::render_markdown_html(&body.get())></div>
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="post-form__message">{move || info.get()}</p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {if is_edit { "Save changes" } else { "Publish" }}
            </button>
        </form>
    }
}
