pub use volunet_core::prelude::*;

// vim: ts=4
