use super::*;

fn table() -> RouteTable {
    RouteTable::builder()
        .public("/", Page::Home)
        .public("/about", Page::About)
        .public("/post/:id", Page::PostView)
        .protected("/post/:id/edit", Page::EditPost)
        .fallback(Page::NotFound)
        .build()
        .unwrap()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn builder_preserves_declaration_order() {
    let pages: Vec<Page> = table().entries().iter().map(RouteEntry::page).collect();
    assert_eq!(pages, vec![Page::Home, Page::About, Page::PostView, Page::EditPost, Page::NotFound]);
}

#[test]
fn missing_fallback_is_rejected() {
    let result = RouteTable::builder().public("/", Page::Home).build();
    assert_eq!(result, Err(RouteTableError::MissingFallback));
}

#[test]
fn empty_table_is_rejected() {
    assert_eq!(RouteTable::new(Vec::new()), Err(RouteTableError::MissingFallback));
}

#[test]
fn duplicate_fallback_is_rejected() {
    let result = RouteTable::builder().public("/*", Page::NotFound).fallback(Page::NotFound).build();
    assert_eq!(
        result,
        Err(RouteTableError::DuplicateFallback { first: "/*".to_owned(), second: "*".to_owned() })
    );
}

#[test]
fn fallback_must_be_last() {
    let result = RouteTable::builder().fallback(Page::NotFound).public("/", Page::Home).build();
    assert_eq!(result, Err(RouteTableError::FallbackNotLast { pattern: "*".to_owned() }));
}

#[test]
fn protected_fallback_is_rejected() {
    let result = RouteTable::builder().public("/", Page::Home).protected("*", Page::NotFound).build();
    assert_eq!(result, Err(RouteTableError::ProtectedFallback { pattern: "*".to_owned() }));

    let entries = vec![
        RouteEntry::public("/", Page::Home).unwrap(),
        RouteEntry::protected("/*", Page::NotFound).unwrap(),
    ];
    assert_eq!(RouteTable::new(entries), Err(RouteTableError::ProtectedFallback { pattern: "/*".to_owned() }));
}

#[test]
fn page_params_must_be_bound() {
    let result = RouteTable::builder().public("/post", Page::PostView).fallback(Page::NotFound).build();
    assert_eq!(
        result,
        Err(RouteTableError::MissingParam { pattern: "/post".to_owned(), page: Page::PostView, param: "id" })
    );
}

#[test]
fn malformed_pattern_is_rejected() {
    let result = RouteTable::builder().public("about", Page::About).fallback(Page::NotFound).build();
    assert_eq!(
        result,
        Err(RouteTableError::Pattern(PatternError::MissingLeadingSlash("about".to_owned())))
    );
}

#[test]
fn non_root_wildcard_is_not_a_fallback() {
    let result = RouteTable::builder().public("/docs/*", Page::About).build();
    assert_eq!(result, Err(RouteTableError::MissingFallback));
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn resolve_binds_params() {
    let matched = table().resolve("/post/42");
    assert_eq!(matched.page(), Page::PostView);
    assert_eq!(matched.params.get("id"), Some("42"));
    assert!(!matched.entry.is_protected());
}

#[test]
fn resolve_distinguishes_by_segment_count() {
    let matched = table().resolve("/post/42/edit");
    assert_eq!(matched.page(), Page::EditPost);
    assert_eq!(matched.params.get("id"), Some("42"));
    assert!(matched.entry.is_protected());
}

#[test]
fn resolve_unknown_path_hits_fallback() {
    let matched = table().resolve("/nonexistent/deep/path");
    assert_eq!(matched.page(), Page::NotFound);
    assert!(matched.is_fallback());
    assert_eq!(matched.params.rest(), Some("nonexistent/deep/path"));
}

#[test]
fn earlier_declaration_wins() {
    let table = RouteTable::builder()
        .public("/post/new", Page::About)
        .public("/post/:id", Page::PostView)
        .fallback(Page::NotFound)
        .build()
        .unwrap();
    assert_eq!(table.resolve("/post/new").page(), Page::About);
    assert_eq!(table.resolve("/post/7").page(), Page::PostView);
}

#[test]
fn earlier_param_route_shadows_later_literal() {
    let table = RouteTable::builder()
        .public("/post/:id", Page::PostView)
        .public("/post/new", Page::About)
        .fallback(Page::NotFound)
        .build()
        .unwrap();
    assert_eq!(table.resolve("/post/new").page(), Page::PostView);
}

#[test]
fn earlier_prefix_wildcard_wins_over_later_literal() {
    let table = RouteTable::builder()
        .public("/about/*", Page::About)
        .public("/about/team", Page::Home)
        .fallback(Page::NotFound)
        .build()
        .unwrap();
    assert_eq!(table.resolve("/about/team").page(), Page::About);
}

// =============================================================
// Reverse routing
// =============================================================

#[test]
fn href_builds_first_matching_entry() {
    let table = table();
    assert_eq!(table.href(Page::Home, &[]), Some("/".to_owned()));
    assert_eq!(table.href(Page::EditPost, &[("id", "9")]), Some("/post/9/edit".to_owned()));
}

#[test]
fn href_missing_page_or_param_is_none() {
    let table = table();
    assert_eq!(table.href(Page::Login, &[]), None);
    assert_eq!(table.href(Page::PostView, &[]), None);
}
