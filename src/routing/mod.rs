//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! register(uri, handler)
//!     → normalize.rs (trim, strip one trailing slash)
//!     → duplicate check against stored URIs
//!     → matcher.rs (compile ^(?:uri)$)
//!     → append to Router
//!
//! route(location)
//!     → location.current_path()
//!     → normalize.rs
//!     → router.rs (scan every route, remember the last match)
//!     → invoke handler, or RouteNotFound
//! ```
//!
//! # Design Decisions
//! - Registration and dispatch share one normalization function
//! - Insertion order is the only precedence rule
//! - Last match wins

pub mod matcher;
pub mod normalize;
pub mod router;

pub use matcher::{Matcher, UriPattern};
pub use normalize::normalize_uri;
pub use router::{Handler, Route, Router};
