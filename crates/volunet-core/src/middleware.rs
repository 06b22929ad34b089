//! Auth middleware
//!
//! Resolves the `Authorization: Bearer` header to an authenticated user
//! context and stores it as a request extension for the `Auth` and
//! `OptionalAuth` extractors.

use axum::{
	extract::{Request, State},
	http::header,
	middleware::Next,
	response::Response,
};

use crate::extract::Auth;
use crate::prelude::*;

fn bearer_token(req: &Request) -> Option<&str> {
	req.headers()
		.get(header::AUTHORIZATION)?
		.to_str()
		.ok()?
		.strip_prefix("Bearer ")
}

/// Populate the auth context when a valid bearer token is present.
/// Requests without (or with an invalid) token proceed unauthenticated.
pub async fn optional_auth(State(app): State<App>, mut req: Request, next: Next) -> Response {
	if let Some(token) = bearer_token(&req) {
		match app.identity_adapter.validate_access_token(token).await {
			Ok(ctx) => {
				req.extensions_mut().insert(Auth(ctx));
			}
			Err(err) => {
				debug!("Rejected bearer token: {}", err);
			}
		}
	}

	next.run(req).await
}

// vim: ts=4
