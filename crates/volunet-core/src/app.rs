//! App state type

use std::sync::Arc;

use volunet_types::identity_adapter::IdentityAdapter;
use volunet_types::profile_adapter::ProfileAdapter;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shared application state, constructed once at process start.
///
/// The adapters are the only handles to the identity store and the profile
/// store; handlers receive them through this state instead of constructing
/// clients per call or reaching for globals.
pub struct AppState {
	pub opts: AppBuilderOpts,

	pub identity_adapter: Arc<dyn IdentityAdapter>,
	pub profile_adapter: Arc<dyn ProfileAdapter>,
}

pub type App = Arc<AppState>;

pub struct Adapters {
	pub identity_adapter: Option<Arc<dyn IdentityAdapter>>,
	pub profile_adapter: Option<Arc<dyn ProfileAdapter>>,
}

#[derive(Debug)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
}

// vim: ts=4
