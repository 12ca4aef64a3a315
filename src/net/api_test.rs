use super::*;

// =============================================================
// Endpoints
// =============================================================

#[test]
fn post_endpoint_formats_expected_path() {
    assert_eq!(post_endpoint("42"), "/api/posts/42");
}

#[test]
fn reset_password_endpoint_formats_expected_path() {
    assert_eq!(reset_password_endpoint("tok-1"), "/api/auth/reset-password/tok-1");
}

#[test]
fn client_url_joins_base_and_path() {
    let api = ApiClient::new("https://api.example.test/");
    assert_eq!(api.url("/api/posts"), "https://api.example.test/api/posts");
}

#[test]
fn client_url_same_origin_when_base_empty() {
    let api = ApiClient::new("");
    assert_eq!(api.url("/api/auth/me"), "/api/auth/me");
}

// =============================================================
// Error bodies
// =============================================================

#[test]
fn error_message_prefers_json_message() {
    assert_eq!(error_message(r#"{"message":"  Invalid credentials "}"#), "Invalid credentials");
}

#[test]
fn error_message_falls_back_to_text() {
    assert_eq!(error_message("  upstream timeout\n"), "upstream timeout");
}

#[test]
fn error_message_empty_body_has_generic_text() {
    assert_eq!(error_message("   "), "Request failed.");
}

#[test]
fn sanitize_truncates_long_bodies() {
    let long = "x".repeat(MAX_ERROR_CHARS + 50);
    assert_eq!(sanitize(&long).chars().count(), MAX_ERROR_CHARS);
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn unauthorized_detects_401_only() {
    assert!(ApiError::Http { status: 401, message: "no".to_owned() }.is_unauthorized());
    assert!(!ApiError::Http { status: 403, message: "no".to_owned() }.is_unauthorized());
    assert!(!ApiError::Unavailable.is_unauthorized());
}

#[test]
fn user_message_uses_http_body() {
    let err = ApiError::Http { status: 400, message: "Title is required".to_owned() };
    assert_eq!(err.user_message(), "Title is required");
    assert_eq!(ApiError::Network("offline".to_owned()).user_message(), "network error: offline");
}

#[test]
fn calls_are_unavailable_without_browser() {
    let api = ApiClient::new("");
    let result = block_on(api.fetch_posts());
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Poll a future that never suspends to completion.
fn block_on<F: std::future::Future>(future: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
            return output;
        }
    }
}
