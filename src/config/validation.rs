//! Route table validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Catch every entry `Router::register` would reject
//! - Reject blank handler names
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before a route table is accepted

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::error::RouterError;
use crate::routing::matcher::UriPattern;
use crate::routing::normalize::normalize_uri;

/// A problem with one entry of a route table.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("route #{index}: uri is empty")]
    EmptyUri { index: usize },

    #[error("route #{index}: duplicate uri {uri}")]
    DuplicateUri { index: usize, uri: String },

    #[error("route #{index}: {source}")]
    InvalidPattern {
        index: usize,
        #[source]
        source: RouterError,
    },

    #[error("route #{index}: handler name is empty")]
    EmptyHandler { index: usize },
}

/// Check a route table, collecting every problem found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, route) in config.routes.iter().enumerate() {
        if route.handler.trim().is_empty() {
            errors.push(ValidationError::EmptyHandler { index });
        }

        let uri = match normalize_uri(&route.uri) {
            Ok(uri) => uri,
            Err(_) => {
                errors.push(ValidationError::EmptyUri { index });
                continue;
            }
        };

        if !seen.insert(uri.clone()) {
            errors.push(ValidationError::DuplicateUri { index, uri });
            continue;
        }

        if let Err(source) = UriPattern::new(uri) {
            errors.push(ValidationError::InvalidPattern { index, source });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouteConfig;

    fn table(routes: &[(&str, &str)]) -> RouterConfig {
        RouterConfig {
            routes: routes
                .iter()
                .map(|(uri, handler)| RouteConfig::new(*uri, *handler))
                .collect(),
        }
    }

    #[test]
    fn test_valid_table() {
        let config = table(&[("/", "home"), ("/about", "about"), ("/docs/.*", "docs")]);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let config = table(&[
            ("/a", "a"),
            ("  ", "blank"),
            ("/a/", "again"),
            ("/b(", "broken"),
            ("/c", " "),
        ]);

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(matches!(errors[0], ValidationError::EmptyUri { index: 1 }));
        assert!(matches!(errors[1], ValidationError::DuplicateUri { index: 2, ref uri } if uri == "/a"));
        assert!(matches!(errors[2], ValidationError::InvalidPattern { index: 3, .. }));
        assert!(matches!(errors[3], ValidationError::EmptyHandler { index: 4 }));
    }

    #[test]
    fn test_error_messages() {
        let errors = validate_config(&table(&[("/x", "x"), ("/x/", "y")])).unwrap_err();
        assert_eq!(errors[0].to_string(), "route #1: duplicate uri /x");
    }
}
