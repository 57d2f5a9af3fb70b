//! Route table schema.
//!
//! A route table is a TOML document listing URI patterns and the name of the
//! handler each one dispatches to. Entries are registered in file order, which
//! matters because the last matching route wins.

use serde::{Deserialize, Serialize};

/// Root of a route table file.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RouterConfig {
    /// Routes in registration order.
    pub routes: Vec<RouteConfig>,
}

/// A single URI → handler mapping.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RouteConfig {
    /// URI pattern, normalized on registration.
    pub uri: String,

    /// Handler name resolved by the embedding application.
    pub handler: String,
}

impl RouteConfig {
    pub fn new(uri: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            handler: handler.into(),
        }
    }
}
