use super::*;

// =============================================================
// Identity
// =============================================================

#[test]
fn identity_deserializes_without_token() {
    let identity: Identity = serde_json::from_value(serde_json::json!({
        "user_id": "u1",
        "display_name": "Alice",
        "email": "alice@example.com"
    }))
    .unwrap();
    assert_eq!(identity.user_id, "u1");
    assert_eq!(identity.token, None);
}

#[test]
fn identity_serialization_omits_missing_token() {
    let identity = Identity {
        user_id: "u1".to_owned(),
        display_name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        token: None,
    };
    let value = serde_json::to_value(&identity).unwrap();
    assert!(value.get("token").is_none());
}

#[test]
fn identity_debug_redacts_token() {
    let identity = Identity {
        user_id: "u1".to_owned(),
        display_name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        token: Some("secret-token".to_owned()),
    };
    let debug = format!("{identity:?}");
    assert!(!debug.contains("secret-token"));
    assert!(debug.contains("<redacted>"));
}

// =============================================================
// Posts
// =============================================================

#[test]
fn post_summary_defaults_missing_excerpt() {
    let summary: PostSummary = serde_json::from_value(serde_json::json!({
        "id": "42",
        "title": "Hello",
        "author_name": "Alice",
        "created_at": "2026-01-01T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(summary.excerpt, "");
}

#[test]
fn post_defaults_missing_updated_at() {
    let post: Post = serde_json::from_value(serde_json::json!({
        "id": "42",
        "title": "Hello",
        "body": "# Hi",
        "author_id": "u1",
        "author_name": "Alice",
        "created_at": "2026-01-01T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(post.updated_at, None);
}

#[test]
fn post_draft_from_post_copies_title_and_body() {
    let post = Post {
        id: "42".to_owned(),
        title: "Hello".to_owned(),
        body: "World".to_owned(),
        author_id: "u1".to_owned(),
        author_name: "Alice".to_owned(),
        created_at: "2026-01-01T00:00:00Z".to_owned(),
        updated_at: None,
    };
    assert_eq!(PostDraft::from(&post), PostDraft { title: "Hello".to_owned(), body: "World".to_owned() });
}

#[test]
fn login_request_serializes_fields() {
    let request = LoginRequest { email: "a@b.com".to_owned(), password: "hunter22".to_owned() };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({ "email": "a@b.com", "password": "hunter22" })
    );
}
