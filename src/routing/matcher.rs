//! Route pattern matching.
//!
//! # Responsibilities
//! - Compile a normalized URI into an anchored pattern
//! - Decide whether a normalized path matches a stored URI
//!
//! # Design Decisions
//! - Stored URIs are regular expressions, not literals: `.` `*` `+` and
//!   friends keep their regex meaning and are never escaped
//! - The whole path must match (`^(?:uri)$`), so alternation stays anchored
//! - Matching is case-sensitive
//! - Classes like `\d`, `\w` and `\s` are Unicode-aware
//! - Patterns are compiled once, at registration

use regex::Regex;

use crate::error::RouterError;

/// Trait for matching normalized paths against a route condition.
pub trait Matcher: std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;

    /// The normalized URI this matcher was built from.
    fn source(&self) -> &str;
}

/// A stored URI compiled as a fully anchored regular expression.
#[derive(Debug, Clone)]
pub struct UriPattern {
    uri: String,
    regex: Regex,
}

impl UriPattern {
    /// Compile an already normalized URI.
    pub fn new(uri: impl Into<String>) -> Result<Self, RouterError> {
        let uri = uri.into();
        let regex = Regex::new(&format!("^(?:{})$", uri)).map_err(|source| {
            RouterError::InvalidPattern {
                uri: uri.clone(),
                source,
            }
        })?;

        Ok(Self { uri, regex })
    }
}

impl Matcher for UriPattern {
    fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    fn source(&self) -> &str {
        &self.uri
    }
}
