use std::{env, path, sync::Arc};

use volunet_identity_adapter_sqlite::IdentityAdapterSqlite;
use volunet_profile_adapter_sqlite::ProfileAdapterSqlite;

pub struct Config {
	pub db_dir: path::PathBuf,
	pub listen: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let config = Config {
		db_dir: path::PathBuf::from(env::var("DB_DIR").unwrap_or("./data".to_string())),
		listen: env::var("LISTEN").unwrap_or("127.0.0.1:8080".to_string()),
	};

	tokio::fs::create_dir_all(&config.db_dir).await?;

	let mut builder = volunet::AppBuilder::new();

	let identity_adapter = IdentityAdapterSqlite::new(config.db_dir.join("identity.db")).await?;
	let profile_adapter = ProfileAdapterSqlite::new(config.db_dir.join("profiles.db")).await?;

	builder
		.listen(config.listen.as_str())
		.identity_adapter(Arc::new(identity_adapter))
		.profile_adapter(Arc::new(profile_adapter));

	builder.run().await?;

	Ok(())
}

// vim: ts=4
