//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::Router as BrowserRouter;

use crate::components::layout::Layout;
use crate::components::route_outlet::RouteOutlet;
use crate::net::api::ApiClient;
use crate::routing::{Router, SharedRouter, blog_routes};
use crate::state::navigation::PendingReturn;
use crate::util::auth::provide_auth;
use crate::util::config::AppConfig;

/// Root application component.
///
/// Provides the API client, auth state and router as contexts, then hands the
/// browser location to [`RouteOutlet`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::load();
    let api = ApiClient::new(config.api_base_url.clone());
    provide_context(api.clone());
    provide_auth(api);
    provide_context(RwSignal::new(PendingReturn::default()));

    let body = match blog_routes().and_then(|table| Router::new(table, config.router_config())) {
        Ok(router) => {
            provide_context::<SharedRouter>(Arc::new(router));
            view! {
                <BrowserRouter>
                    <Layout>
                        <RouteOutlet/>
                    </Layout>
                </BrowserRouter>
            }
            .into_any()
        }
        Err(e) => {
            log::error!("app: invalid route configuration: {e}");
            view! {
                <section class="page config-error">
                    <h1>"Configuration error"</h1>
                    <p>{e.to_string()}</p>
                </section>
            }
            .into_any()
        }
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/quill.css"/>
        <Title text="Quill"/>
        {body}
    }
}
