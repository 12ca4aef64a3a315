//! REST helpers for the blog API.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`, sent with the session
//! cookie and aborted after [`REQUEST_TIMEOUT_MS`].
//! Native builds (tests): every call returns [`ApiError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so auth and post fetch
//! failures degrade page behavior without crashing the app. Error bodies are
//! trimmed and truncated before they reach the UI.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    ForgotPasswordRequest, Identity, LoginRequest, Post, PostDraft, PostSummary, RegisterRequest, ResetPasswordRequest,
};

/// Requests are aborted after this many milliseconds.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
#[cfg(any(test, feature = "csr"))]
const MAX_ERROR_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("could not read response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// True when the API rejected the session cookie.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }

    /// Message suitable for display next to a form.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
}

/// Handle to the blog API rooted at a base URL (empty for same-origin).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Look up the session behind the current cookie. `Ok(None)` when there is
    /// no session.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or an unexpected status.
    pub async fn fetch_session(&self) -> Result<Option<Identity>, ApiError> {
        match self.request_json::<(), Identity>(Method::Get, "/api/auth/me", None).await {
            Ok(identity) => Ok(Some(identity)),
            Err(err) if err.is_unauthorized() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// # Errors
    ///
    /// Returns an error when the credentials are rejected or the call fails.
    pub async fn login(&self, request: &LoginRequest) -> Result<Identity, ApiError> {
        self.request_json(Method::Post, "/api/auth/login", Some(request)).await
    }

    /// # Errors
    ///
    /// Returns an error when registration is rejected or the call fails.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Identity, ApiError> {
        self.request_json(Method::Post, "/api/auth/register", Some(request)).await
    }

    /// # Errors
    ///
    /// Returns an error when the call fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.request_empty::<()>(Method::Post, "/api/auth/logout", None).await
    }

    /// # Errors
    ///
    /// Returns an error when the call fails.
    pub async fn request_password_reset(&self, request: &ForgotPasswordRequest) -> Result<(), ApiError> {
        self.request_empty(Method::Post, "/api/auth/forgot-password", Some(request)).await
    }

    /// # Errors
    ///
    /// Returns an error when the token is invalid or the call fails.
    pub async fn reset_password(&self, token: &str, request: &ResetPasswordRequest) -> Result<(), ApiError> {
        self.request_empty(Method::Post, &reset_password_endpoint(token), Some(request)).await
    }

    /// # Errors
    ///
    /// Returns an error when the call fails.
    pub async fn fetch_posts(&self) -> Result<Vec<PostSummary>, ApiError> {
        self.request_json::<(), _>(Method::Get, "/api/posts", None).await
    }

    /// # Errors
    ///
    /// Returns an error when the post does not exist or the call fails.
    pub async fn fetch_post(&self, id: &str) -> Result<Post, ApiError> {
        self.request_json::<(), _>(Method::Get, &post_endpoint(id), None).await
    }

    /// # Errors
    ///
    /// Returns an error when the draft is rejected or the call fails.
    pub async fn create_post(&self, draft: &PostDraft) -> Result<Post, ApiError> {
        self.request_json(Method::Post, "/api/posts", Some(draft)).await
    }

    /// # Errors
    ///
    /// Returns an error when the draft is rejected or the call fails.
    pub async fn update_post(&self, id: &str, draft: &PostDraft) -> Result<Post, ApiError> {
        self.request_json(Method::Put, &post_endpoint(id), Some(draft)).await
    }

    async fn request_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            // The deadline stays armed until the body has been read.
            let (response, _deadline) = self.send(method, path, body).await?;
            if response.ok() {
                response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
            } else {
                Err(http_error(response).await)
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, path, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn request_empty<B: Serialize>(&self, method: Method, path: &str, body: Option<&B>) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let (response, _deadline) = self.send(method, path, body).await?;
            if response.ok() { Ok(()) } else { Err(http_error(response).await) }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, path, body);
            Err(ApiError::Unavailable)
        }
    }

    /// Send a request; the returned timer aborts it (body read included)
    /// after [`REQUEST_TIMEOUT_MS`] unless dropped first.
    #[cfg(feature = "csr")]
    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(gloo_net::http::Response, gloo_timers::callback::Timeout), ApiError> {
        use gloo_net::http::Request;
        use gloo_timers::callback::Timeout;
        use web_sys::{AbortController, RequestCredentials};

        let url = self.url(path);
        let payload = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Encode(e.to_string()))?;

        let controller = AbortController::new().map_err(|_| ApiError::Network("abort controller unavailable".to_owned()))?;
        let signal = controller.signal();
        let timeout_controller = controller.clone();
        let deadline = Timeout::new(REQUEST_TIMEOUT_MS, move || timeout_controller.abort());

        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
        }
        .credentials(RequestCredentials::Include)
        .abort_signal(Some(&signal));

        let request = match payload {
            Some(payload) => builder.header("Content-Type", "application/json").body(payload),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;

        let response = request.send().await.map_err(|e| {
            log::warn!("api: {method:?} {path} failed: {e}");
            ApiError::Network(e.to_string())
        })?;
        Ok((response, deadline))
    }
}

#[cfg(feature = "csr")]
async fn http_error(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    log::warn!("api: {} returned {status}", response.url());
    let body = response.text().await.unwrap_or_default();
    ApiError::Http { status, message: error_message(&body) }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

fn post_endpoint(id: &str) -> String {
    format!("/api/posts/{id}")
}

fn reset_password_endpoint(token: &str) -> String {
    format!("/api/auth/reset-password/{token}")
}

#[cfg(any(test, feature = "csr"))]
/// Prefer the API's `{ "message": ... }` body, fall back to the trimmed text.
fn error_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<super::types::ApiErrorBody>(body) {
        return sanitize(&parsed.message);
    }
    sanitize(body)
}

#[cfg(any(test, feature = "csr"))]
fn sanitize(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() { "Request failed.".to_owned() } else { trimmed.chars().take(MAX_ERROR_CHARS).collect() }
}
