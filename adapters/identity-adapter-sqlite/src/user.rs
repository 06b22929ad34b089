//! User account operations

use sqlx::{Row, SqlitePool};

use crate::utils::*;
use volunet::identity_adapter::{IdentityRecord, NewUser, UserClaims};
use volunet::prelude::*;
use volunet::utils::random_uid;

const BCRYPT_COST: u32 = 10;

/// Hash a password on a blocking thread; bcrypt is too slow for the
/// async executor.
async fn generate_password_hash(password: String) -> VnResult<String> {
	tokio::task::spawn_blocking(move || {
		bcrypt::hash(&password, BCRYPT_COST)
			.map_err(|_| Error::Internal("Failed to hash password".to_string()))
	})
	.await
	.map_err(|_| Error::Internal("Failed to hash password".to_string()))?
}

/// Create a new user account with an empty claims set
pub(crate) async fn create_user(db: &SqlitePool, user: NewUser<'_>) -> VnResult<IdentityRecord> {
	// Check if the email is already registered
	let existing = sqlx::query("SELECT uid FROM users WHERE email = ?1")
		.bind(user.email)
		.fetch_optional(db)
		.await
		.inspect_err(inspect)
		.or(Err(Error::DbError))?;

	if existing.is_some() {
		return Err(Error::Conflict(
			"The email address is already in use by another account.".to_string(),
		));
	}

	let uid = random_uid()?;
	let password_hash = generate_password_hash(user.password.to_string()).await?;

	sqlx::query(
		"INSERT INTO users (uid, email, password, display_name, claims) VALUES (?1, ?2, ?3, ?4, ?5)",
	)
	.bind(&uid)
	.bind(user.email)
	.bind(&password_hash)
	.bind(user.display_name)
	.bind("{}")
	.execute(db)
	.await
	.inspect_err(inspect)
	.or(Err(Error::DbError))?;

	read_user(db, &uid).await
}

/// Read a user account by uid
pub(crate) async fn read_user(db: &SqlitePool, uid: &str) -> VnResult<IdentityRecord> {
	let res = sqlx::query(
		"SELECT uid, email, display_name, claims, created_at FROM users WHERE uid = ?1",
	)
	.bind(uid)
	.fetch_one(db)
	.await;

	map_res(res, |row| {
		let claims: Option<String> = row.try_get("claims")?;
		Ok(IdentityRecord {
			uid: row.try_get("uid")?,
			email: row.try_get("email")?,
			display_name: row.try_get::<Option<Box<str>>, _>("display_name")?.unwrap_or_default(),
			claims: parse_claims(claims.as_deref()),
			created_at: Timestamp(row.try_get("created_at")?),
		})
	})
}

/// Replace the custom claims of a user (full overwrite, last write wins)
pub(crate) async fn update_claims(
	db: &SqlitePool,
	uid: &str,
	claims: &UserClaims,
) -> VnResult<()> {
	let claims_json = serde_json::to_string(claims).map_err(|_| Error::Parse)?;

	let res = sqlx::query("UPDATE users SET claims = ?2 WHERE uid = ?1")
		.bind(uid)
		.bind(&claims_json)
		.execute(db)
		.await
		.inspect_err(inspect)
		.or(Err(Error::DbError))?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound);
	}
	Ok(())
}

// vim: ts=4
