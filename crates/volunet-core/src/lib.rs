//! Core infrastructure for the Volunet platform.
//!
//! This crate contains shared infrastructure used by the feature crates:
//! the application state handle with its injected adapters, the auth
//! middleware, and the request extractors.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod app;
pub mod extract;
pub mod middleware;
pub mod prelude;

// Re-export commonly used types
pub use app::{Adapters, App, AppBuilderOpts, AppState, VERSION};
pub use extract::{Auth, OptionalAuth};

// vim: ts=4
