//! Per-navigation access decision for protected routes.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::table::RouteEntry;
use crate::state::auth::AuthState;

/// Outcome of an access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Allow,
    RedirectTo(String),
}

/// Decides whether a resolved entry may render for the current session.
///
/// Pure: the decision depends only on the entry and the auth state passed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGuard {
    login_path: String,
}

impl AccessGuard {
    pub fn new(login_path: impl Into<String>) -> Self {
        Self { login_path: login_path.into() }
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn evaluate(&self, entry: &RouteEntry, auth: &AuthState) -> Access {
        if !entry.is_protected() || auth.is_authenticated() {
            Access::Allow
        } else {
            Access::RedirectTo(self.login_path.clone())
        }
    }
}
