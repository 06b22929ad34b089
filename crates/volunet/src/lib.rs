//! Volunet is a registration service for a volunteer/institution matching
//! platform.
//!
//! # Features
//!
//! - Self-service registration for volunteers and institutions
//!	- payload validation with first-error reporting
//!	- role claims on every identity
//!	- role-scoped profile documents
//!	- short-lived login tokens
//! - Profile attachment for already-authenticated callers
//! - Merged identity + profile view for the current user
//! - Pluggable identity and profile storage (SQLite adapters included)

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

// Re-export shared types and adapter traits from volunet-types
pub use volunet_types::error;
pub use volunet_types::identity_adapter;
pub use volunet_types::profile_adapter;
pub use volunet_types::types;
pub use volunet_types::utils;

// Feature crate re-exports
pub use volunet_registration as registration;

// Local modules
pub mod app;
pub mod prelude;
pub mod routes;

pub use app::AppBuilder;
pub use volunet_core::{Adapters, App, AppBuilderOpts, AppState, VERSION};

// vim: ts=4
