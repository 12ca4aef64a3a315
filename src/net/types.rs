//! Wire DTOs for the blog API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the API's JSON payloads so serde round-trips stay
//! lossless. Request bodies that carry passwords deliberately do not derive
//! `Debug`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the auth endpoints.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique user identifier.
    pub user_id: String,
    /// Display name shown in the header and on posts.
    pub display_name: String,
    pub email: String,
    /// Bearer token for APIs that do not use the session cookie.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("user_id", &self.user_id)
            .field("display_name", &self.display_name)
            .field("email", &self.email)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Post listing entry from `GET /api/posts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    /// Short excerpt of the body; may contain markdown.
    #[serde(default)]
    pub excerpt: String,
    pub author_name: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// Full post from `GET /api/posts/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    /// Markdown body.
    pub body: String,
    pub author_id: String,
    pub author_name: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Create/update payload for posts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
}

impl From<&Post> for PostDraft {
    fn from(post: &Post) -> Self {
        Self { title: post.title.clone(), body: post.body.clone() }
    }
}

#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub password: String,
}

/// Error body returned by the API on non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
