//! Route registry and dispatch.
//!
//! # Responsibilities
//! - Store normalized routes in insertion order
//! - Reject blank and duplicate URIs at registration
//! - Resolve the current path and invoke exactly one handler
//!
//! # Design Decisions
//! - Append-only: routes are never removed or replaced
//! - The scan visits every route and the last match wins
//! - Explicit `RouteNotFound` rather than a silent default route
//! - Single-threaded: handlers are not required to be `Send`

use std::fmt;

use crate::config::{RouteConfig, RouterConfig};
use crate::error::RouterError;
use crate::location::Location;
use crate::routing::matcher::{Matcher, UriPattern};
use crate::routing::normalize::normalize_uri;

/// Callback invoked when its route is selected.
pub type Handler = Box<dyn Fn()>;

/// A normalized URI paired with its handler.
pub struct Route {
    pattern: UriPattern,
    handler: Handler,
}

impl Route {
    /// The normalized URI this route was registered under.
    pub fn uri(&self) -> &str {
        self.pattern.source()
    }

    /// Run the handler.
    pub fn invoke(&self) {
        (self.handler)()
    }

    fn matches(&self, path: &str) -> bool {
        self.pattern.matches(path)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route").field("uri", &self.uri()).finish()
    }
}

/// Ordered registry of routes.
#[derive(Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a router from a route table, registering entries in file order.
    ///
    /// `make_handler` is called once per entry to produce its callback.
    pub fn from_config<F>(config: &RouterConfig, mut make_handler: F) -> Result<Self, RouterError>
    where
        F: FnMut(&RouteConfig) -> Handler,
    {
        let mut router = Self::new();
        for route in &config.routes {
            router.register_boxed(&route.uri, make_handler(route))?;
        }
        Ok(router)
    }

    /// Register `handler` under `uri`.
    ///
    /// Fails on a blank URI, on a URI whose normalized form is already
    /// registered, or on one that is not a valid pattern. The router is
    /// unchanged on failure.
    pub fn register<F>(&mut self, uri: &str, handler: F) -> Result<(), RouterError>
    where
        F: Fn() + 'static,
    {
        self.register_boxed(uri, Box::new(handler))
    }

    fn register_boxed(&mut self, uri: &str, handler: Handler) -> Result<(), RouterError> {
        let uri = normalize_uri(uri)?;

        if self.routes.iter().any(|route| route.uri() == uri) {
            return Err(RouterError::DuplicateRoute { uri });
        }

        let pattern = UriPattern::new(uri)?;
        tracing::debug!(
            uri = %pattern.source(),
            routes = self.routes.len() + 1,
            "Route registered"
        );
        self.routes.push(Route { pattern, handler });
        Ok(())
    }

    /// Dispatch on the path reported by `location`.
    pub fn route<L>(&self, location: &L) -> Result<(), RouterError>
    where
        L: Location + ?Sized,
    {
        self.route_path(&location.current_path())
    }

    /// Dispatch on an explicit path.
    pub fn route_path(&self, path: &str) -> Result<(), RouterError> {
        let route = self.resolve(path)?;
        tracing::debug!(path = %path, uri = %route.uri(), "Dispatching route");
        route.invoke();
        Ok(())
    }

    /// Find the route `path` would dispatch to, without invoking it.
    pub fn resolve(&self, path: &str) -> Result<&Route, RouterError> {
        let path = normalize_uri(path)?;

        let mut selected = None;
        for route in &self.routes {
            let matched = route.matches(&path);
            tracing::trace!(path = %path, uri = %route.uri(), matched, "Evaluated route");
            if matched {
                selected = Some(route);
            }
        }

        selected.ok_or(RouterError::RouteNotFound { path })
    }

    /// Whether `uri` (after normalization) is registered.
    pub fn contains(&self, uri: &str) -> bool {
        match normalize_uri(uri) {
            Ok(uri) => self.routes.iter().any(|route| route.uri() == uri),
            Err(_) => false,
        }
    }

    /// Stored URIs in registration order.
    pub fn uris(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(Route::uri)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.uris().collect::<Vec<_>>())
            .finish()
    }
}
