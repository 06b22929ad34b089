//! Commonly used imports for Volunet crates.

pub use crate::error::{Error, VnResult};
pub use crate::types::{Role, Timestamp};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
