//! Token issuance and validation

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use sqlx::{Row, SqlitePool};

use crate::utils::inspect;
use volunet::identity_adapter::{AuthCtx, CUSTOM_TOKEN_EXPIRY};
use volunet::prelude::*;

#[derive(Debug, Deserialize, Serialize)]
struct TokenClaims {
	sub: Box<str>,
	iat: i64,
	exp: i64,
}

/// Get or generate the JWT secret for HS256 signing
pub(crate) async fn ensure_jwt_secret(db: &SqlitePool) -> VnResult<String> {
	// Try to read existing secret
	let res = sqlx::query("SELECT value FROM vars WHERE key = ?1")
		.bind("jwt_secret")
		.fetch_optional(db)
		.await
		.inspect_err(inspect)
		.or(Err(Error::DbError))?;

	if let Some(row) = res {
		return row.try_get("value").inspect_err(inspect).or(Err(Error::DbError));
	}

	// Generate new secret (32 random bytes, base64 encoded)
	use base64::Engine;
	use rand::Rng;
	let mut secret_bytes = [0u8; 32];
	let mut rng = rand::rng();
	rng.fill_bytes(&mut secret_bytes);
	let secret_str = base64::engine::general_purpose::STANDARD.encode(secret_bytes);

	// Store in database
	sqlx::query("INSERT OR REPLACE INTO vars (key, value) VALUES (?1, ?2)")
		.bind("jwt_secret")
		.bind(&secret_str)
		.execute(db)
		.await
		.inspect_err(inspect)
		.or(Err(Error::DbError))?;

	info!("Generated new JWT secret");
	Ok(secret_str)
}

/// Issue a short-lived bearer token bound to the given uid
pub(crate) fn create_custom_token(jwt_secret: &str, uid: &str) -> VnResult<Box<str>> {
	let iat = Timestamp::now();
	let claims = TokenClaims {
		sub: uid.into(),
		iat: iat.0,
		exp: iat.add_seconds(CUSTOM_TOKEN_EXPIRY).0,
	};

	let token = encode(
		&jsonwebtoken::Header::new(Algorithm::HS256),
		&claims,
		&EncodingKey::from_secret(jwt_secret.as_bytes()),
	)
	.map_err(|_| Error::Internal("Failed to sign token".to_string()))?;

	Ok(token.into())
}

/// Validate a bearer token (signature and expiry) and return the user context
pub(crate) fn validate_access_token(jwt_secret: &str, token: &str) -> VnResult<AuthCtx> {
	let token_data = decode::<TokenClaims>(
		token,
		&DecodingKey::from_secret(jwt_secret.as_bytes()),
		&Validation::new(Algorithm::HS256),
	)
	.map_err(|_| Error::Unauthorized)?;

	Ok(AuthCtx { uid: token_data.claims.sub })
}

// vim: ts=4
