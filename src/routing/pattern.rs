//! Path pattern parsing and matching.
//!
//! DESIGN
//! ======
//! Patterns are parsed once when the route table is built. Matching then works
//! on pre-split segments, so a navigation only pays for a segment walk.
//!
//! Supported syntax:
//! - literal segments (`/about`) match only themselves, case-sensitively;
//! - `:name` segments match any non-empty single segment and bind it;
//! - a trailing `*` (alone or as `/*`) matches any remaining suffix, including
//!   an empty one.

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;

/// Problems found while parsing a path pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("pattern must start with '/' or be '*': {0:?}")]
    MissingLeadingSlash(String),
    #[error("empty parameter name in pattern {0:?}")]
    EmptyParamName(String),
    #[error("invalid parameter name {name:?} in pattern {pattern:?}")]
    InvalidParamName { pattern: String, name: String },
    #[error("wildcard must be the final segment in pattern {0:?}")]
    WildcardNotLast(String),
    #[error("duplicate parameter {name:?} in pattern {pattern:?}")]
    DuplicateParam { pattern: String, name: String },
}

/// One parsed pattern segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Param(String),
}

/// Parameter bindings captured while matching a path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    values: Vec<(String, String)>,
    rest: Option<String>,
}

impl RouteParams {
    /// Bound value for `:name`, if the matched pattern declared it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }

    /// Suffix consumed by a trailing wildcard, joined with `/`.
    ///
    /// `Some("")` when the wildcard matched nothing, `None` when the pattern has
    /// no wildcard.
    pub fn rest(&self) -> Option<&str> {
        self.rest.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.rest.is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A parsed route path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
    wildcard: bool,
}

impl PathPattern {
    /// Parse a pattern such as `/post/:id/edit` or `/docs/*`.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] when the pattern is malformed.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let trimmed = raw.trim();
        if trimmed == "*" {
            return Ok(Self { raw: trimmed.to_owned(), segments: Vec::new(), wildcard: true });
        }
        if !trimmed.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash(raw.to_owned()));
        }

        let parts: Vec<&str> = split_segments(trimmed).collect();
        let mut segments = Vec::with_capacity(parts.len());
        let mut wildcard = false;

        for (i, part) in parts.iter().enumerate() {
            if *part == "*" {
                if i + 1 != parts.len() {
                    return Err(PatternError::WildcardNotLast(raw.to_owned()));
                }
                wildcard = true;
            } else if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(PatternError::EmptyParamName(raw.to_owned()));
                }
                if !is_valid_param_name(name) {
                    return Err(PatternError::InvalidParamName { pattern: raw.to_owned(), name: name.to_owned() });
                }
                if segments.iter().any(|s| matches!(s, Segment::Param(existing) if existing == name)) {
                    return Err(PatternError::DuplicateParam { pattern: raw.to_owned(), name: name.to_owned() });
                }
                segments.push(Segment::Param(name.to_owned()));
            } else if part.contains('*') {
                return Err(PatternError::WildcardNotLast(raw.to_owned()));
            } else {
                segments.push(Segment::Literal((*part).to_owned()));
            }
        }

        Ok(Self { raw: trimmed.to_owned(), segments, wildcard })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn has_wildcard(&self) -> bool {
        self.wildcard
    }

    /// True for the bare `*` / `/*` pattern that matches every path.
    pub fn is_catch_all(&self) -> bool {
        self.wildcard && self.segments.is_empty()
    }

    /// Whether the pattern binds a `:name` segment.
    pub fn binds(&self, name: &str) -> bool {
        self.segments.iter().any(|s| matches!(s, Segment::Param(p) if p == name))
    }

    /// Match `path` against this pattern, returning the captured bindings.
    pub fn match_path(&self, path: &str) -> Option<RouteParams> {
        let parts: Vec<&str> = split_segments(strip_query(path)).collect();

        if parts.len() < self.segments.len() || (!self.wildcard && parts.len() != self.segments.len()) {
            return None;
        }

        let mut values = Vec::new();
        for (segment, part) in self.segments.iter().zip(&parts) {
            match segment {
                Segment::Literal(literal) => {
                    if literal != part {
                        return None;
                    }
                }
                Segment::Param(name) => values.push((name.clone(), (*part).to_owned())),
            }
        }

        let rest = self.wildcard.then(|| parts[self.segments.len()..].join("/"));
        Some(RouteParams { values, rest })
    }

    /// Substitute `params` into the pattern to produce a concrete path.
    ///
    /// Returns `None` if a declared parameter has no non-empty value. A
    /// trailing wildcard expands to nothing.
    pub fn fill(&self, params: &[(&str, &str)]) -> Option<String> {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Literal(literal) => out.push_str(literal),
                Segment::Param(name) => {
                    let value = params.iter().find(|(k, _)| k == name).map(|(_, v)| *v)?;
                    if value.is_empty() || value.contains('/') {
                        return None;
                    }
                    out.push_str(value);
                }
            }
        }
        if out.is_empty() {
            out.push('/');
        }
        Some(out)
    }
}

/// Drop the query string and fragment from a location path.
pub fn strip_query(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn is_valid_param_name(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
