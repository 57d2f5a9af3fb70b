//! Current-location providers.
//!
//! The router never reads a global navigation state. Whatever hosts it passes
//! something implementing [`Location`] to [`Router::route`](crate::Router::route)
//! each time dispatch is wanted.

/// Source of the path the application is currently at.
pub trait Location {
    /// The active path, before normalization.
    fn current_path(&self) -> String;
}

impl Location for str {
    fn current_path(&self) -> String {
        self.to_string()
    }
}

impl Location for String {
    fn current_path(&self) -> String {
        self.clone()
    }
}

impl<T: Location + ?Sized> Location for &T {
    fn current_path(&self) -> String {
        (**self).current_path()
    }
}

/// Adapts a closure into a [`Location`].
pub struct FnLocation<F>(pub F);

impl<F> Location for FnLocation<F>
where
    F: Fn() -> String,
{
    fn current_path(&self) -> String {
        (self.0)()
    }
}

/// An owned path that can be moved around to simulate navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticLocation {
    path: String,
}

impl StaticLocation {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Replace the current path.
    pub fn navigate(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Location for StaticLocation {
    fn current_path(&self) -> String {
        self.path.clone()
    }
}
