//! Path-to-page resolution with access checks.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RouteOutlet` calls [`Router::navigate`] whenever the browser location or
//! the auth state changes. Each call walks Resolving → Allowed or
//! Resolving → Redirecting; the returned [`Navigation`] is the terminal state.
//!
//! Redirects discard the requested navigation. Remembering the requested path
//! for after login is opt-in via [`RouterConfig::return_to_origin`].

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use super::guard::{Access, AccessGuard};
use super::page::Page;
use super::table::{RouteMatch, RouteTable, RouteTableError};
use crate::state::auth::AuthState;

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_HOME_PATH: &str = "/";

/// Router behavior knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    pub login_path: String,
    pub home_path: String,
    /// Remember the protected path that triggered a login redirect and send
    /// the user back there after signing in.
    pub return_to_origin: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            home_path: DEFAULT_HOME_PATH.to_owned(),
            return_to_origin: false,
        }
    }
}

/// Terminal state of one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Access granted; render the matched page.
    Render(RouteMatch),
    /// Access denied; replace the location with `to`.
    Redirect {
        to: String,
        /// Requested path, kept only when return-to-origin is enabled.
        origin: Option<String>,
    },
}

#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
    guard: AccessGuard,
    config: RouterConfig,
}

impl Router {
    /// # Errors
    ///
    /// Returns [`RouteTableError::LoginRoute`] if the login path is protected
    /// or unknown, and [`RouteTableError::HomeRoute`] if the home path is
    /// protected.
    pub fn new(table: RouteTable, config: RouterConfig) -> Result<Self, RouteTableError> {
        let login = table.resolve(&config.login_path);
        if login.is_fallback() || login.entry.is_protected() {
            return Err(RouteTableError::LoginRoute { path: config.login_path });
        }
        if table.resolve(&config.home_path).entry.is_protected() {
            return Err(RouteTableError::HomeRoute { path: config.home_path });
        }

        let guard = AccessGuard::new(config.login_path.clone());
        Ok(Self { table, guard, config })
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Path for `page`, falling back to the home path when the page has no
    /// route or a parameter is missing.
    pub fn href(&self, page: Page, params: &[(&str, &str)]) -> String {
        self.table.href(page, params).unwrap_or_else(|| self.config.home_path.clone())
    }

    pub fn resolve(&self, path: &str) -> RouteMatch {
        self.table.resolve(path)
    }

    /// Decide what a navigation to `path` produces for the given session.
    pub fn navigate(&self, path: &str, auth: &AuthState) -> Navigation {
        let matched = self.table.resolve(path);
        if !matched.entry.is_protected() {
            log::debug!("route: {path} -> {} (public)", matched.page());
            return Navigation::Render(matched);
        }

        match self.guard.evaluate(&matched.entry, auth) {
            Access::Allow => {
                log::debug!("route: {path} -> {} (authorized)", matched.page());
                Navigation::Render(matched)
            }
            Access::RedirectTo(to) => {
                log::info!("route: {path} requires login, redirecting to {to}");
                let origin = if self.config.return_to_origin { canonical_path(&matched) } else { None };
                Navigation::Redirect { to, origin }
            }
        }
    }

    /// Where to go after a successful login.
    ///
    /// The remembered origin wins only when return-to-origin is enabled and
    /// the origin still resolves to a real (non-fallback) route other than the
    /// login page itself. The returned path is rebuilt from the matched route,
    /// so it is always a single-slash path on this origin.
    pub fn landing_after_login(&self, origin: Option<&str>) -> String {
        if self.config.return_to_origin {
            if let Some(origin) = origin {
                let matched = self.table.resolve(origin);
                let is_login = self.table.resolve(&self.config.login_path).entry == matched.entry;
                if !matched.is_fallback() && !is_login {
                    if let Some(path) = canonical_path(&matched) {
                        return path;
                    }
                }
            }
        }
        self.config.home_path.clone()
    }
}

/// Path rebuilt from the matched pattern and its bindings. Query, fragment
/// and repeated slashes from the requested path are dropped.
fn canonical_path(matched: &RouteMatch) -> Option<String> {
    let params: Vec<(&str, &str)> = matched.params.iter().collect();
    matched.entry.pattern().fill(&params)
}
