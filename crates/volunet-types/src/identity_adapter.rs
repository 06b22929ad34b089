//! Adapter that manages identity records: user accounts, role claims, and tokens.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fmt::Debug;

use crate::prelude::*;

/// Expiry of custom tokens issued at registration, in seconds.
pub const CUSTOM_TOKEN_EXPIRY: i64 = 3600;

/// Custom claims attached to an identity.
///
/// The role claim is set once per registration but a later registration
/// flow may overwrite it (last write wins).
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserClaims {
	pub role: Option<Role>,
}

/// An identity record as stored by the identity adapter.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRecord {
	/// Opaque stable identifier
	pub uid: Box<str>,
	pub email: Box<str>,
	pub display_name: Box<str>,
	#[serde(default)]
	pub claims: UserClaims,
	pub created_at: Timestamp,
}

/// Data needed to create a new identity
#[derive(Debug)]
pub struct NewUser<'a> {
	pub email: &'a str,
	pub password: &'a str,
	pub display_name: &'a str,
}

/// Context struct for an authenticated user
#[derive(Clone, Debug)]
pub struct AuthCtx {
	pub uid: Box<str>,
}

/// A Volunet identity adapter
///
/// Every `IdentityAdapter` implementation is required to implement this trait.
/// An `IdentityAdapter` is responsible for storing and managing user accounts,
/// their role claims, and for issuing and validating bearer tokens.
#[async_trait]
pub trait IdentityAdapter: Debug + Send + Sync {
	/// Creates a new identity. Fails with `Error::Conflict` if the email
	/// is already registered.
	async fn create_user(&self, user: NewUser<'_>) -> VnResult<IdentityRecord>;

	/// Reads an identity by its uid
	async fn read_user(&self, uid: &str) -> VnResult<IdentityRecord>;

	/// Replaces the custom claims of an identity
	async fn update_claims(&self, uid: &str, claims: &UserClaims) -> VnResult<()>;

	/// Issues a short-lived bearer token bound to the given uid
	async fn create_custom_token(&self, uid: &str) -> VnResult<Box<str>>;

	/// Validates a bearer token and returns the authenticated user context
	async fn validate_access_token(&self, token: &str) -> VnResult<AuthCtx>;
}


// vim: ts=4
