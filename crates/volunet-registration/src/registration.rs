//! Registration business logic
//!
//! Contains the core logic for processing registration requests, extracted
//! from the HTTP handlers for better separation of concerns. Each flow runs
//! its steps strictly in sequence: identity create/fetch, role claim, profile
//! document, token.

use serde_json::Value;

use volunet_types::identity_adapter::{AuthCtx, IdentityRecord, NewUser, UserClaims};

use crate::prelude::*;

/// Result of a completed registration flow
#[derive(Debug)]
pub struct RegistrationResult {
	pub uid: Box<str>,
	pub email: Box<str>,
	/// Bearer token for the fresh identity. `None` for the flows that
	/// attach a profile to an already-authenticated caller.
	pub token: Option<Box<str>>,
}

/// Input for a self-service registration
#[derive(Debug)]
pub struct NewRegistration<'a> {
	pub name: &'a str,
	pub email: &'a str,
	pub password: &'a str,
	/// Validated registration fields, without the password
	pub fields: &'a Value,
}

/// Self-service registration: create an identity, tag it with the role
/// claim, store the profile document, and issue a login token.
///
/// Steps that already committed are not compensated when a later step
/// fails: an identity whose profile write failed stays behind without a
/// profile document.
pub async fn register_new_user(
	app: &App,
	role: Role,
	reg: NewRegistration<'_>,
) -> VnResult<RegistrationResult> {
	let user = app
		.identity_adapter
		.create_user(NewUser {
			email: reg.email,
			password: reg.password,
			display_name: reg.name,
		})
		.await?;

	info!(uid = %user.uid, role = %role, "user created");

	app.identity_adapter.update_claims(&user.uid, &UserClaims { role: Some(role) }).await?;

	app.profile_adapter.write_profile(role, &user.uid, reg.fields).await?;

	let token = app.identity_adapter.create_custom_token(&user.uid).await?;

	Ok(RegistrationResult { uid: user.uid, email: user.email, token: Some(token) })
}

/// Attach registration data to an already-authenticated caller: overwrite
/// the role claim and replace the profile document under the caller's uid.
pub async fn attach_profile(
	app: &App,
	role: Role,
	auth: &AuthCtx,
	fields: &Value,
) -> VnResult<RegistrationResult> {
	let user = app.identity_adapter.read_user(&auth.uid).await?;

	app.identity_adapter.update_claims(&user.uid, &UserClaims { role: Some(role) }).await?;

	app.profile_adapter.write_profile(role, &user.uid, fields).await?;

	info!(uid = %user.uid, role = %role, "profile attached");

	Ok(RegistrationResult { uid: user.uid, email: user.email, token: None })
}

/// Shallow merge of identity fields and profile document fields.
/// Profile fields win on key collision.
pub fn merge_details(identity: &IdentityRecord, profile: Option<Value>) -> VnResult<Value> {
	let mut merged = serde_json::to_value(identity)?;
	if let (Some(target), Some(Value::Object(fields))) = (merged.as_object_mut(), profile) {
		for (key, value) in fields {
			target.insert(key, value);
		}
	}
	Ok(merged)
}

/// Read-only aggregation: identity fields merged with the profile document
/// from the collection of the caller's role claim (volunteer when unset).
pub async fn user_details(app: &App, auth: &AuthCtx) -> VnResult<Value> {
	let user = app.identity_adapter.read_user(&auth.uid).await?;

	let role = user.claims.role.unwrap_or(Role::Volunteer);

	let profile = app.profile_adapter.read_profile(role, &auth.uid).await?;

	merge_details(&user, profile)
}


// vim: ts=4
