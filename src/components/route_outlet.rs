//! Bridge between the browser location and the routing core.
//!
//! SYSTEM CONTEXT
//! ==============
//! `leptos_router` owns the history integration (link clicks, back/forward);
//! this component turns the current pathname plus the auth state into a
//! [`Navigation`] and acts on it. Rendering dispatches on the closed [`Page`]
//! enum, so every route target has a view at compile time.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading::Loading;
use crate::pages::{
    about::AboutPage, create_post::CreatePostPage, edit_post::EditPostPage, forgot_password::ForgotPasswordPage,
    home::HomePage, login::LoginPage, not_found::NotFoundPage, post::PostPage, register::RegisterPage,
    reset_password::ResetPasswordPage,
};
use crate::routing::{Navigation, Page, RouteMatch, SharedRouter};
use crate::state::navigation::PendingReturn;
use crate::util::auth::use_auth;

/// Router provided by the app root.
pub fn use_router() -> SharedRouter {
    expect_context::<SharedRouter>()
}

#[component]
pub fn RouteOutlet() -> impl IntoView {
    let router = use_router();
    let auth = use_auth().state();
    let pending = expect_context::<RwSignal<PendingReturn>>();
    let location = use_location();
    let navigate = use_navigate();

    // Held back while the startup session lookup runs, so a reload on a
    // protected page does not bounce to login.
    let outcome = Memo::new(move |_| {
        let path = location.pathname.get();
        auth.with(|state| (!state.is_restoring()).then(|| router.navigate(&path, state)))
    });

    Effect::new(move |_| {
        if let Some(Navigation::Redirect { to, origin }) = outcome.get() {
            if let Some(origin) = origin {
                pending.update(|p| p.remember(origin));
            }
            navigate(&to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match outcome.get() {
        Some(Navigation::Render(matched)) => render_page(&matched),
        Some(Navigation::Redirect { .. }) | None => view! { <Loading/> }.into_any(),
    }
}

fn render_page(matched: &RouteMatch) -> AnyView {
    let param = |name: &str| matched.params.get(name).unwrap_or_default().to_owned();
    let page = matched.page();

    let body = match page {
        Page::Home => view! { <HomePage/> }.into_any(),
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::Register => view! { <RegisterPage/> }.into_any(),
        Page::ForgotPassword => view! { <ForgotPasswordPage/> }.into_any(),
        Page::ResetPassword => view! { <ResetPasswordPage token=param("token")/> }.into_any(),
        Page::PostView => view! { <PostPage id=param("id")/> }.into_any(),
        Page::CreatePost => view! { <CreatePostPage/> }.into_any(),
        Page::EditPost => view! { <EditPostPage id=param("id")/> }.into_any(),
        Page::About => view! { <AboutPage/> }.into_any(),
        Page::NotFound => view! { <NotFoundPage/> }.into_any(),
    };

    view! {
        <Title text=page.title()/>
        {body}
    }
    .into_any()
}
