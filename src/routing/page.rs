//! Closed set of page variants a route can target.

use std::fmt;

/// Every screen the application can render.
///
/// Route entries name one of these variants instead of a string key, and the
/// shell matches on it exhaustively when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Login,
    Register,
    ForgotPassword,
    ResetPassword,
    PostView,
    CreatePost,
    EditPost,
    About,
    NotFound,
}

impl Page {
    /// Path parameters the page reads from its route match.
    pub fn required_params(self) -> &'static [&'static str] {
        match self {
            Page::ResetPassword => &["token"],
            Page::PostView | Page::EditPost => &["id"],
            Page::Home
            | Page::Login
            | Page::Register
            | Page::ForgotPassword
            | Page::CreatePost
            | Page::About
            | Page::NotFound => &[],
        }
    }

    /// Document title shown for the page.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Quill",
            Page::Login => "Sign in · Quill",
            Page::Register => "Create account · Quill",
            Page::ForgotPassword => "Forgot password · Quill",
            Page::ResetPassword => "Reset password · Quill",
            Page::PostView => "Post · Quill",
            Page::CreatePost => "New post · Quill",
            Page::EditPost => "Edit post · Quill",
            Page::About => "About · Quill",
            Page::NotFound => "Not found · Quill",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
