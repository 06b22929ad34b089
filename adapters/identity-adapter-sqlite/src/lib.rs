//! SQLite-backed identity adapter for Volunet.
//!
//! Stores user accounts with bcrypt password hashes and JSON role claims,
//! and issues HS256 bearer tokens signed with an instance-level secret.

use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use volunet::identity_adapter::{
	AuthCtx, IdentityAdapter, IdentityRecord, NewUser, UserClaims,
};
use volunet::prelude::*;

mod schema;
mod token;
mod user;
mod utils;

#[derive(Debug)]
pub struct IdentityAdapterSqlite {
	db: SqlitePool,
	jwt_secret: Box<str>,
}

impl IdentityAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> VnResult<Self> {
		let opts = SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(SqliteJournalMode::Wal);
		let db = SqlitePoolOptions::new()
			.connect_with(opts)
			.await
			.map_err(|err| Error::ConfigError(format!("Failed to open identity db: {}", err)))?;

		schema::init_db(&db).await.map_err(|err| {
			Error::ConfigError(format!("Failed to initialize identity db: {}", err))
		})?;

		let jwt_secret = token::ensure_jwt_secret(&db).await?;

		Ok(Self { db, jwt_secret: jwt_secret.into() })
	}
}

#[async_trait]
impl IdentityAdapter for IdentityAdapterSqlite {
	async fn create_user(&self, user: NewUser<'_>) -> VnResult<IdentityRecord> {
		user::create_user(&self.db, user).await
	}

	async fn read_user(&self, uid: &str) -> VnResult<IdentityRecord> {
		user::read_user(&self.db, uid).await
	}

	async fn update_claims(&self, uid: &str, claims: &UserClaims) -> VnResult<()> {
		user::update_claims(&self.db, uid, claims).await
	}

	async fn create_custom_token(&self, uid: &str) -> VnResult<Box<str>> {
		token::create_custom_token(&self.jwt_secret, uid)
	}

	async fn validate_access_token(&self, token: &str) -> VnResult<AuthCtx> {
		token::validate_access_token(&self.jwt_secret, token)
	}
}


// vim: ts=4
