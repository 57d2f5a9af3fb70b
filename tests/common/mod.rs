//! Shared utilities for integration tests.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use tempfile::NamedTempFile;

/// Records the names of handlers in the order they ran.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<String>>>,
}

#[allow(dead_code)]
impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler that appends `name` to this log when invoked.
    pub fn handler(&self, name: impl Into<String>) -> impl Fn() + 'static {
        let calls = self.calls.clone();
        let name = name.into();
        move || calls.borrow_mut().push(name.clone())
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

/// Write a route table to a temp file that is removed when dropped.
#[allow(dead_code)]
pub fn route_table(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("routes-")
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write route table");
    file.flush().expect("Failed to flush route table");
    file
}
