//! App builder - constructs and runs the Volunet application

use std::sync::Arc;

use crate::prelude::*;
use crate::routes;
use volunet_core::{Adapters, App, AppBuilderOpts, AppState, VERSION};
use volunet_types::identity_adapter::IdentityAdapter;
use volunet_types::profile_adapter::ProfileAdapter;

pub struct AppBuilder {
	opts: AppBuilderOpts,
	adapters: Adapters,
}

impl AppBuilder {
	pub fn new() -> Self {
		tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.init();
		AppBuilder {
			opts: AppBuilderOpts { listen: "127.0.0.1:8080".into() },
			adapters: Adapters { identity_adapter: None, profile_adapter: None },
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}

	// Adapters
	pub fn identity_adapter(&mut self, identity_adapter: Arc<dyn IdentityAdapter>) -> &mut Self {
		self.adapters.identity_adapter = Some(identity_adapter);
		self
	}
	pub fn profile_adapter(&mut self, profile_adapter: Arc<dyn ProfileAdapter>) -> &mut Self {
		self.adapters.profile_adapter = Some(profile_adapter);
		self
	}

	/// Construct the shared application state. Fails when an adapter is
	/// missing.
	pub fn build(self) -> VnResult<App> {
		let Some(identity_adapter) = self.adapters.identity_adapter else {
			error!("FATAL: No identity adapter configured");
			return Err(Error::ConfigError("No identity adapter configured".to_string()));
		};
		let Some(profile_adapter) = self.adapters.profile_adapter else {
			error!("FATAL: No profile adapter configured");
			return Err(Error::ConfigError("No profile adapter configured".to_string()));
		};

		Ok(Arc::new(AppState { opts: self.opts, identity_adapter, profile_adapter }))
	}

	pub async fn run(self) -> VnResult<()> {
		info!("Volunet v{}", VERSION);

		let app = self.build()?;
		let listen = app.opts.listen.clone();
		let router = routes::init(app);

		let listener = tokio::net::TcpListener::bind(listen.as_ref()).await?;
		info!("Listening on {}", listen);
		axum::serve(listener, router).await?;

		Ok(())
	}
}

// vim: ts=4
