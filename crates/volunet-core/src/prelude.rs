//! Commonly used imports for crates building on volunet-core.

pub use crate::app::App;
pub use volunet_types::prelude::*;

// vim: ts=4
