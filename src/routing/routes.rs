//! The blog's route declarations.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use super::page::Page;
use super::table::{RouteTable, RouteTableError};

/// Build the application's route table, in precedence order.
///
/// # Errors
///
/// Returns an error if a declaration is malformed. The test suite builds this
/// table, so a defect here fails tests rather than a page load.
pub fn blog_routes() -> Result<RouteTable, RouteTableError> {
    RouteTable::builder()
        .public("/", Page::Home)
        .public("/login", Page::Login)
        .public("/register", Page::Register)
        .public("/forgot-password", Page::ForgotPassword)
        .public("/reset-password/:token", Page::ResetPassword)
        .public("/post/:id", Page::PostView)
        .protected("/create-post", Page::CreatePost)
        .protected("/post/:id/edit", Page::EditPost)
        .public("/about", Page::About)
        .fallback(Page::NotFound)
        .build()
}
