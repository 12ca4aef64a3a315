//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Consulted by the router's access guard on every navigation and by
//! identity-aware components (header, post actions). The shell owns the single
//! instance; pages change it only through `login` and `logout`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::ApiError;
use crate::net::types::Identity;

/// Authentication state tracking the current identity and restore status.
///
/// `restoring` is true while the startup session lookup is in flight; the
/// shell holds navigation decisions until it clears.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    current: Option<Identity>,
    restoring: bool,
}

impl AuthState {
    /// Anonymous state awaiting the startup session lookup.
    pub fn restoring() -> Self {
        Self { current: None, restoring: true }
    }

    /// State with `identity` already signed in.
    pub fn signed_in(identity: Identity) -> Self {
        Self { current: Some(identity), restoring: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_restoring(&self) -> bool {
        self.restoring
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    /// Record a confirmed login, replacing any previous identity.
    pub fn login(&mut self, identity: Identity) {
        log::info!("auth: signed in as {}", identity.user_id);
        self.current = Some(identity);
        self.restoring = false;
    }

    /// Drop the active identity (explicit logout or invalidated session).
    pub fn logout(&mut self) {
        if let Some(previous) = self.current.take() {
            log::info!("auth: signed out {}", previous.user_id);
        }
        self.restoring = false;
    }

    /// Apply the result of the startup session lookup.
    ///
    /// A login that completed while the lookup was in flight wins over a
    /// missing session.
    pub fn finish_restore(&mut self, identity: Option<Identity>) {
        if !self.restoring {
            return;
        }
        self.restoring = false;
        if let Some(identity) = identity {
            log::info!("auth: restored session for {}", identity.user_id);
            self.current = Some(identity);
        }
    }

    /// Drop the identity when the API rejected the session cookie.
    ///
    /// Returns true when a signed-in identity was dropped.
    pub fn expire_on(&mut self, error: &ApiError) -> bool {
        if !error.is_unauthorized() || self.current.is_none() {
            return false;
        }
        log::warn!("auth: session rejected by the API");
        self.logout();
        true
    }
}
