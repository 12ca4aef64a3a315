//! Leptos glue around the auth state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root owns one `RwSignal<AuthState>` and shares it through
//! [`AuthContext`]. Pages call `login` / `logout` after their own API call
//! succeeds; `RouteOutlet` re-evaluates the current route on every change.

use leptos::prelude::*;

use crate::net::api::{ApiClient, ApiError};
use crate::net::types::Identity;
use crate::state::auth::AuthState;

/// Handle to the session's auth state.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
}

impl AuthContext {
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    pub fn is_restoring(&self) -> bool {
        self.state.with(AuthState::is_restoring)
    }

    pub fn identity(&self) -> Option<Identity> {
        self.state.with(|s| s.identity().cloned())
    }

    /// Applied as one signal update so a navigation never sees a partial change.
    pub fn login(&self, identity: Identity) {
        self.state.update(|s| s.login(identity));
    }

    pub fn logout(&self) {
        self.state.update(AuthState::logout);
    }

    /// Sign out when an API call reports the session is gone; the outlet then
    /// re-evaluates the current route.
    pub fn expire_on(&self, error: &ApiError) {
        if error.is_unauthorized() {
            self.state.update(|s| {
                s.expire_on(error);
            });
        }
    }
}

/// Create the auth context and start the one-time session lookup.
pub fn provide_auth(api: ApiClient) -> AuthContext {
    let auth = AuthContext { state: RwSignal::new(AuthState::restoring()) };
    provide_context(auth);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let identity = match api.fetch_session().await {
            Ok(identity) => identity,
            Err(e) => {
                log::warn!("auth: session lookup failed: {e}");
                None
            }
        };
        auth.state.update(|s| s.finish_restore(identity));
    });

    #[cfg(not(feature = "csr"))]
    {
        let _ = api;
        auth.state.update(|s| s.finish_restore(None));
    }

    auth
}

/// Auth context provided by the app root.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
