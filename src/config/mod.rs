//! Route table configuration.
//!
//! # Data Flow
//! ```text
//! routes.toml
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated)
//!     → Router::from_config (register in file order)
//! ```
//!
//! # Design Decisions
//! - Handlers are referenced by name; the embedding application maps names
//!   to callbacks
//! - Validation mirrors registration so a valid table always builds

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::RouterConfig;
pub use schema::RouteConfig;
pub use validation::ValidationError;
