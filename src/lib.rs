//! Client-side path router.
//!
//! Maps normalized URI patterns to zero-argument callbacks and invokes the
//! one matching the current location.
//!
//! Stored URIs are regular expressions that must match the whole normalized
//! path. When several routes match, the one registered last is invoked.
//!
//! # Errors
//!
//! - [`Router::register`] fails with [`RouterError::EmptyInput`] for a blank
//!   URI, [`RouterError::DuplicateRoute`] when the normalized URI is already
//!   registered, and [`RouterError::InvalidPattern`] when it does not compile
//!   as a regular expression. Patterns are checked here, once, rather than on
//!   every dispatch.
//! - [`Router::route`] fails with [`RouterError::EmptyInput`] for a blank path
//!   and [`RouterError::RouteNotFound`] when nothing matches.
//!
//! ```
//! use path_router::{Router, RouterError};
//!
//! let mut router = Router::new();
//! let err = router.register("/users/(", || {}).unwrap_err();
//! assert!(matches!(err, RouterError::InvalidPattern { .. }));
//! assert!(router.is_empty());
//! ```
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use path_router::{Router, StaticLocation};
//!
//! let hits = Rc::new(Cell::new(0));
//! let counter = hits.clone();
//!
//! let mut router = Router::new();
//! router.register("/x/", move || counter.set(counter.get() + 1)).unwrap();
//!
//! router.route(&StaticLocation::new("/x")).unwrap();
//! assert_eq!(hits.get(), 1);
//! ```

pub mod config;
pub mod error;
pub mod location;
pub mod routing;

pub use config::RouterConfig;
pub use error::RouterError;
pub use location::{FnLocation, Location, StaticLocation};
pub use routing::{normalize_uri, Handler, Route, Router};
