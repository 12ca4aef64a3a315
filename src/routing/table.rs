//! Ordered route table with construction-time validation.
//!
//! DESIGN
//! ======
//! Declaration order is precedence: the first entry whose pattern matches
//! wins. Exactly one catch-all entry must exist and it must be declared last,
//! which makes `resolve` total. Tables that break these rules are rejected when
//! built, so an unmatched path can never surface during navigation.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use super::page::Page;
use super::pattern::{PathPattern, PatternError, RouteParams};

/// Configuration defects detected while building a route table or router.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("invalid route pattern: {0}")]
    Pattern(#[from] PatternError),
    #[error("route table has no catch-all fallback entry")]
    MissingFallback,
    #[error("route table declares more than one catch-all entry ({first:?} and {second:?})")]
    DuplicateFallback { first: String, second: String },
    #[error("catch-all entry {pattern:?} must be public")]
    ProtectedFallback { pattern: String },
    #[error("catch-all entry {pattern:?} must be the last route")]
    FallbackNotLast { pattern: String },
    #[error("route {pattern:?} targets {page} but does not bind :{param}")]
    MissingParam { pattern: String, page: Page, param: &'static str },
    #[error("login path {path:?} must resolve to a public, non-fallback route")]
    LoginRoute { path: String },
    #[error("home path {path:?} must resolve to a public route")]
    HomeRoute { path: String },
}

/// One immutable route declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pattern: PathPattern,
    page: Page,
    protected: bool,
}

impl RouteEntry {
    /// Route that renders for every visitor.
    ///
    /// # Errors
    ///
    /// Returns an error if `pattern` does not parse.
    pub fn public(pattern: &str, page: Page) -> Result<Self, RouteTableError> {
        Ok(Self { pattern: PathPattern::parse(pattern)?, page, protected: false })
    }

    /// Route that requires an authenticated identity.
    ///
    /// # Errors
    ///
    /// Returns an error if `pattern` does not parse.
    pub fn protected(pattern: &str, page: Page) -> Result<Self, RouteTableError> {
        Ok(Self { pattern: PathPattern::parse(pattern)?, page, protected: true })
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn is_protected(&self) -> bool {
        self.protected
    }

    pub fn is_fallback(&self) -> bool {
        self.pattern.is_catch_all()
    }
}

/// Result of resolving a path: the winning entry plus its bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub entry: RouteEntry,
    pub params: RouteParams,
}

impl RouteMatch {
    pub fn page(&self) -> Page {
        self.entry.page
    }

    pub fn is_fallback(&self) -> bool {
        self.entry.is_fallback()
    }
}

/// Fixed, validated, ordered sequence of route entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Validate and wrap an ordered list of entries.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteTableError`] when the fallback entry is missing,
    /// duplicated, protected or not last, or when an entry does not bind a parameter its
    /// page needs.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteTableError> {
        let mut fallback: Option<usize> = None;
        for (index, entry) in entries.iter().enumerate() {
            for &param in entry.page.required_params() {
                if !entry.pattern.binds(param) {
                    return Err(RouteTableError::MissingParam {
                        pattern: entry.pattern.as_str().to_owned(),
                        page: entry.page,
                        param,
                    });
                }
            }
            if entry.is_fallback() {
                if let Some(first) = fallback {
                    return Err(RouteTableError::DuplicateFallback {
                        first: entries[first].pattern.as_str().to_owned(),
                        second: entry.pattern.as_str().to_owned(),
                    });
                }
                if entry.protected {
                    return Err(RouteTableError::ProtectedFallback { pattern: entry.pattern.as_str().to_owned() });
                }
                fallback = Some(index);
            }
        }

        let Some(fallback) = fallback else {
            return Err(RouteTableError::MissingFallback);
        };
        if fallback + 1 != entries.len() {
            return Err(RouteTableError::FallbackNotLast { pattern: entries[fallback].pattern.as_str().to_owned() });
        }

        Ok(Self { entries })
    }

    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Return the first entry matching `path`, in declaration order.
    ///
    /// Always succeeds: unknown paths land on the fallback entry.
    pub fn resolve(&self, path: &str) -> RouteMatch {
        self.entries
            .iter()
            .find_map(|entry| {
                entry.pattern.match_path(path).map(|params| RouteMatch { entry: entry.clone(), params })
            })
            .unwrap_or_else(|| self.fallback_match(path))
    }

    /// Build the path of the first entry targeting `page`.
    pub fn href(&self, page: Page, params: &[(&str, &str)]) -> Option<String> {
        self.entries.iter().find(|entry| entry.page == page).and_then(|entry| entry.pattern.fill(params))
    }

    // The last entry is the catch-all once `new` has accepted the table.
    fn fallback_match(&self, path: &str) -> RouteMatch {
        let entry = self.entries[self.entries.len() - 1].clone();
        let params = entry.pattern.match_path(path).unwrap_or_default();
        RouteMatch { entry, params }
    }
}

/// Incremental table declaration; validation happens in [`build`](Self::build).
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: Vec<(String, Page, bool)>,
}

impl RouteTableBuilder {
    #[must_use]
    pub fn public(mut self, pattern: &str, page: Page) -> Self {
        self.routes.push((pattern.to_owned(), page, false));
        self
    }

    #[must_use]
    pub fn protected(mut self, pattern: &str, page: Page) -> Self {
        self.routes.push((pattern.to_owned(), page, true));
        self
    }

    /// Declare the catch-all entry.
    #[must_use]
    pub fn fallback(self, page: Page) -> Self {
        self.public("*", page)
    }

    /// # Errors
    ///
    /// Returns the first pattern or table error found.
    pub fn build(self) -> Result<RouteTable, RouteTableError> {
        let entries = self
            .routes
            .into_iter()
            .map(|(pattern, page, protected)| {
                if protected {
                    RouteEntry::protected(&pattern, page)
                } else {
                    RouteEntry::public(&pattern, page)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        RouteTable::new(entries)
    }
}
