use super::*;
use crate::net::types::Identity;
use crate::routing::page::Page;
use crate::routing::routes::blog_routes;

fn identity() -> Identity {
    Identity {
        user_id: "u1".to_owned(),
        display_name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        token: None,
    }
}

fn router() -> Router {
    Router::new(blog_routes().unwrap(), RouterConfig::default()).unwrap()
}

fn returning_router() -> Router {
    let config = RouterConfig { return_to_origin: true, ..RouterConfig::default() };
    Router::new(blog_routes().unwrap(), config).unwrap()
}

fn rendered_page(nav: &Navigation) -> Option<Page> {
    match nav {
        Navigation::Render(matched) => Some(matched.page()),
        Navigation::Redirect { .. } => None,
    }
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_rejects_protected_login_path() {
    let config = RouterConfig { login_path: "/create-post".to_owned(), ..RouterConfig::default() };
    assert_eq!(
        Router::new(blog_routes().unwrap(), config).unwrap_err(),
        RouteTableError::LoginRoute { path: "/create-post".to_owned() }
    );
}

#[test]
fn new_rejects_unknown_login_path() {
    let config = RouterConfig { login_path: "/sign-in".to_owned(), ..RouterConfig::default() };
    assert!(matches!(Router::new(blog_routes().unwrap(), config), Err(RouteTableError::LoginRoute { .. })));
}

#[test]
fn new_rejects_protected_home_path() {
    let config = RouterConfig { home_path: "/create-post".to_owned(), ..RouterConfig::default() };
    assert_eq!(
        Router::new(blog_routes().unwrap(), config).unwrap_err(),
        RouteTableError::HomeRoute { path: "/create-post".to_owned() }
    );
}

#[test]
fn default_config_disables_return_to_origin() {
    let config = RouterConfig::default();
    assert_eq!(config.login_path, "/login");
    assert_eq!(config.home_path, "/");
    assert!(!config.return_to_origin);
}

// =============================================================
// Navigation scenarios
// =============================================================

#[test]
fn post_view_renders_with_bound_id() {
    let nav = router().navigate("/post/42", &AuthState::default());
    let Navigation::Render(matched) = nav else {
        panic!("expected render, got {nav:?}");
    };
    assert_eq!(matched.page(), Page::PostView);
    assert_eq!(matched.params.get("id"), Some("42"));
}

#[test]
fn create_post_redirects_when_anonymous() {
    let nav = router().navigate("/create-post", &AuthState::default());
    assert_eq!(nav, Navigation::Redirect { to: "/login".to_owned(), origin: None });
}

#[test]
fn create_post_renders_when_signed_in() {
    let nav = router().navigate("/create-post", &AuthState::signed_in(identity()));
    assert_eq!(rendered_page(&nav), Some(Page::CreatePost));
}

#[test]
fn edit_post_redirects_when_anonymous() {
    let nav = router().navigate("/post/42/edit", &AuthState::default());
    assert_eq!(nav, Navigation::Redirect { to: "/login".to_owned(), origin: None });
}

#[test]
fn unknown_path_renders_not_found() {
    let nav = router().navigate("/nonexistent/deep/path", &AuthState::default());
    assert_eq!(rendered_page(&nav), Some(Page::NotFound));
}

#[test]
fn restoring_session_counts_as_anonymous() {
    let nav = router().navigate("/create-post", &AuthState::restoring());
    assert!(matches!(nav, Navigation::Redirect { .. }));
}

#[test]
fn navigation_is_idempotent() {
    let router = router();
    let anonymous = AuthState::default();
    let signed_in = AuthState::signed_in(identity());
    for path in ["/", "/post/42", "/create-post", "/post/1/edit", "/nowhere"] {
        assert_eq!(router.navigate(path, &anonymous), router.navigate(path, &anonymous));
        assert_eq!(router.navigate(path, &signed_in), router.navigate(path, &signed_in));
    }
}

#[test]
fn login_turns_redirect_into_render() {
    let router = router();
    let mut auth = AuthState::default();
    assert!(matches!(router.navigate("/create-post", &auth), Navigation::Redirect { .. }));

    auth.login(identity());
    assert_eq!(rendered_page(&router.navigate("/create-post", &auth)), Some(Page::CreatePost));
}

#[test]
fn logout_turns_render_into_redirect() {
    let router = router();
    let mut auth = AuthState::signed_in(identity());
    assert_eq!(rendered_page(&router.navigate("/post/3/edit", &auth)), Some(Page::EditPost));

    auth.logout();
    assert!(matches!(router.navigate("/post/3/edit", &auth), Navigation::Redirect { .. }));
}

// =============================================================
// Return to origin
// =============================================================

#[test]
fn redirect_keeps_origin_when_enabled() {
    let nav = returning_router().navigate("/post/5/edit", &AuthState::default());
    assert_eq!(
        nav,
        Navigation::Redirect { to: "/login".to_owned(), origin: Some("/post/5/edit".to_owned()) }
    );
}

#[test]
fn redirect_origin_is_rebuilt_from_the_route() {
    let nav = returning_router().navigate("//post/evil.com/edit", &AuthState::default());
    assert_eq!(
        nav,
        Navigation::Redirect { to: "/login".to_owned(), origin: Some("/post/evil.com/edit".to_owned()) }
    );

    let nav = returning_router().navigate("/create-post?draft=1#top", &AuthState::default());
    assert_eq!(nav, Navigation::Redirect { to: "/login".to_owned(), origin: Some("/create-post".to_owned()) });
}

#[test]
fn landing_after_login_never_leaves_the_origin() {
    let router = returning_router();
    let landing = router.landing_after_login(Some("//post/evil.com/edit"));
    assert_eq!(landing, "/post/evil.com/edit");
    assert!(!landing.starts_with("//"));
    assert_eq!(router.landing_after_login(Some("///create-post")), "/create-post");
}

#[test]
fn landing_after_login_defaults_to_home() {
    assert_eq!(router().landing_after_login(Some("/create-post")), "/");
    assert_eq!(router().landing_after_login(None), "/");
}

#[test]
fn landing_after_login_returns_to_origin_when_enabled() {
    assert_eq!(returning_router().landing_after_login(Some("/create-post")), "/create-post");
}

#[test]
fn landing_after_login_ignores_unknown_or_login_origin() {
    let router = returning_router();
    assert_eq!(router.landing_after_login(Some("/nowhere/at/all")), "/");
    assert_eq!(router.landing_after_login(Some("/login")), "/");
    assert_eq!(router.landing_after_login(None), "/");
}

// =============================================================
// Links
// =============================================================

#[test]
fn href_builds_page_paths() {
    let router = router();
    assert_eq!(router.href(Page::PostView, &[("id", "42")]), "/post/42");
    assert_eq!(router.href(Page::EditPost, &[("id", "42")]), "/post/42/edit");
}

#[test]
fn href_missing_param_falls_back_to_home() {
    assert_eq!(router().href(Page::PostView, &[]), "/");
}
