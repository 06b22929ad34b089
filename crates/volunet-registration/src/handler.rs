//! Registration and user details handlers
//!
//! The four registration handlers never fail at the HTTP level: every
//! validation or downstream error is converted into a response body with an
//! `error` message. The read-only `GET /api/me` aggregation is the one
//! exception: downstream failures there surface as HTTP error statuses.

use axum::{
	extract::{Json, State},
	http::StatusCode,
};
use serde::Serialize;
use serde_json::{Value, json};

use volunet_core::extract::OptionalAuth;
use volunet_types::identity_adapter::AuthCtx;

use crate::prelude::*;
use crate::registration::{self, NewRegistration, RegistrationResult};
use crate::schema;

/// Response body of the registration operations.
///
/// On success all fields are set and `error` serializes as `null`; on
/// failure only `error` is present.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub uuid: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub role: Option<Role>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub token: Option<String>,
	pub error: Option<String>,
}

impl RegisterResponse {
	fn success(role: Role, result: &RegistrationResult) -> Self {
		let message = match role {
			Role::Volunteer => "Volunteer created successfully",
			Role::Institution => "Institution created successfully",
		};
		RegisterResponse {
			message: Some(message.to_string()),
			uuid: Some(result.uid.to_string()),
			email: Some(result.email.to_string()),
			role: Some(role),
			token: result.token.as_ref().map(ToString::to_string),
			error: None,
		}
	}

	fn failure(err: &Error) -> Self {
		RegisterResponse {
			message: None,
			uuid: None,
			email: None,
			role: None,
			token: None,
			error: Some(err.to_string()),
		}
	}
}

fn respond(role: Role, result: VnResult<RegistrationResult>) -> (StatusCode, Json<RegisterResponse>) {
	match result {
		Ok(result) => (StatusCode::OK, Json(RegisterResponse::success(role, &result))),
		Err(err) => {
			warn!(role = %role, "registration failed: {}", err);
			(StatusCode::OK, Json(RegisterResponse::failure(&err)))
		}
	}
}

async fn register_volunteer(app: &App, payload: &Value) -> VnResult<RegistrationResult> {
	let reg = schema::parse_volunteer(payload)?;
	let password = schema::parse_password(payload)?;

	registration::register_new_user(
		app,
		Role::Volunteer,
		NewRegistration {
			name: &reg.name,
			email: &reg.email,
			password: &password,
			fields: &reg.document()?,
		},
	)
	.await
}

async fn register_institution(app: &App, payload: &Value) -> VnResult<RegistrationResult> {
	let reg = schema::parse_institution(payload)?;
	let password = schema::parse_password(payload)?;

	registration::register_new_user(
		app,
		Role::Institution,
		NewRegistration {
			name: &reg.name,
			email: &reg.email,
			password: &password,
			fields: &reg.document()?,
		},
	)
	.await
}

// Payload validation runs before the auth check, so an invalid payload is
// reported even to unauthenticated callers.
async fn attach_volunteer(
	app: &App,
	auth: Option<AuthCtx>,
	payload: &Value,
) -> VnResult<RegistrationResult> {
	let reg = schema::parse_volunteer(payload)?;
	let Some(auth) = auth else {
		return Err(Error::Unauthorized);
	};

	registration::attach_profile(app, Role::Volunteer, &auth, &reg.document()?).await
}

async fn attach_institution(
	app: &App,
	auth: Option<AuthCtx>,
	payload: &Value,
) -> VnResult<RegistrationResult> {
	let reg = schema::parse_institution(payload)?;
	let Some(auth) = auth else {
		return Err(Error::Unauthorized);
	};

	registration::attach_profile(app, Role::Institution, &auth, &reg.document()?).await
}

/// POST /api/register/volunteer - Self-service volunteer registration
pub async fn post_register_volunteer(
	State(app): State<App>,
	Json(payload): Json<Value>,
) -> (StatusCode, Json<RegisterResponse>) {
	respond(Role::Volunteer, register_volunteer(&app, &payload).await)
}

/// POST /api/register/institution - Self-service institution registration
pub async fn post_register_institution(
	State(app): State<App>,
	Json(payload): Json<Value>,
) -> (StatusCode, Json<RegisterResponse>) {
	respond(Role::Institution, register_institution(&app, &payload).await)
}

/// POST /api/register/volunteer/me - Attach a volunteer profile to the caller
pub async fn post_register_volunteer_current(
	State(app): State<App>,
	OptionalAuth(auth): OptionalAuth,
	Json(payload): Json<Value>,
) -> (StatusCode, Json<RegisterResponse>) {
	respond(Role::Volunteer, attach_volunteer(&app, auth, &payload).await)
}

/// POST /api/register/institution/me - Attach an institution profile to the caller
pub async fn post_register_institution_current(
	State(app): State<App>,
	OptionalAuth(auth): OptionalAuth,
	Json(payload): Json<Value>,
) -> (StatusCode, Json<RegisterResponse>) {
	respond(Role::Institution, attach_institution(&app, auth, &payload).await)
}

/// GET /api/me - Identity fields merged with the caller's profile document
///
/// Downstream failures are not converted to an `error` body here; they
/// propagate as HTTP error responses.
pub async fn get_user_details(
	State(app): State<App>,
	OptionalAuth(auth): OptionalAuth,
) -> VnResult<(StatusCode, Json<Value>)> {
	let Some(auth) = auth else {
		return Ok((StatusCode::OK, Json(json!({ "error": "User is not authenticated" }))));
	};

	let details = registration::user_details(&app, &auth).await?;

	Ok((StatusCode::OK, Json(details)))
}


// vim: ts=4
