//! Router error definitions.

use thiserror::Error;

/// Errors returned by route registration and dispatch.
///
/// None of these are recovered internally; they terminate the current call
/// and leave the router unchanged.
#[derive(Debug, Error)]
pub enum RouterError {
    /// The URI or current path was blank after trimming.
    #[error("uri is empty")]
    EmptyInput,

    /// A route with the same normalized URI is already registered.
    #[error("URI exists: {uri}")]
    DuplicateRoute { uri: String },

    /// No registered pattern matched the current path.
    #[error("Route isn't registered: {path}")]
    RouteNotFound { path: String },

    /// The normalized URI does not compile as a regular expression.
    #[error("invalid route pattern {uri}: {source}")]
    InvalidPattern {
        uri: String,
        #[source]
        source: regex::Error,
    },
}
