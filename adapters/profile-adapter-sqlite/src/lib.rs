//! SQLite-backed profile adapter for Volunet.
//!
//! One row per profile document, keyed by (collection, uid). Writes replace
//! the whole document; there is no partial update path.

use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use volunet::prelude::*;
use volunet::profile_adapter::ProfileAdapter;

mod profile;
mod schema;

#[derive(Debug)]
pub struct ProfileAdapterSqlite {
	db: SqlitePool,
}

impl ProfileAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> VnResult<Self> {
		let opts = SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(SqliteJournalMode::Wal);
		let db = SqlitePoolOptions::new()
			.connect_with(opts)
			.await
			.map_err(|err| Error::ConfigError(format!("Failed to open profile db: {}", err)))?;

		schema::init_db(&db).await.map_err(|err| {
			Error::ConfigError(format!("Failed to initialize profile db: {}", err))
		})?;

		Ok(Self { db })
	}
}

#[async_trait]
impl ProfileAdapter for ProfileAdapterSqlite {
	async fn write_profile(
		&self,
		role: Role,
		uid: &str,
		fields: &serde_json::Value,
	) -> VnResult<()> {
		profile::write_profile(&self.db, role.collection(), uid, fields).await
	}

	async fn read_profile(&self, role: Role, uid: &str) -> VnResult<Option<serde_json::Value>> {
		profile::read_profile(&self.db, role.collection(), uid).await
	}
}


// vim: ts=4
