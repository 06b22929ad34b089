//! Error types shared by all Volunet crates.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub type VnResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	NotFound,
	Unauthorized,
	PermissionDenied,
	DbError,
	Parse,

	/// A registration payload failed schema validation.
	/// The message names the first violated constraint.
	ValidationError(String),
	/// A unique constraint was violated (duplicate email).
	Conflict(String),
	ConfigError(String),
	ServiceUnavailable(String),
	Internal(String),
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "Resource not found"),
			Error::Unauthorized => write!(f, "User is not authenticated"),
			Error::PermissionDenied => write!(f, "Permission denied"),
			Error::DbError => write!(f, "Database error"),
			Error::Parse => write!(f, "Parse error"),
			Error::ValidationError(msg)
			| Error::Conflict(msg)
			| Error::ConfigError(msg)
			| Error::ServiceUnavailable(msg)
			| Error::Internal(msg) => write!(f, "{}", msg),
		}
	}
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Error::Internal(err.to_string())
	}
}

impl From<serde_json::Error> for Error {
	fn from(_: serde_json::Error) -> Self {
		Error::Parse
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		let status = match self {
			Error::NotFound => StatusCode::NOT_FOUND,
			Error::Unauthorized => StatusCode::UNAUTHORIZED,
			Error::PermissionDenied => StatusCode::FORBIDDEN,
			Error::ValidationError(_) => StatusCode::BAD_REQUEST,
			Error::Conflict(_) => StatusCode::CONFLICT,
			Error::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
			Error::DbError | Error::Parse | Error::ConfigError(_) | Error::Internal(_) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		};
		let body = Json(json!({ "error": self.to_string() }));
		(status, body).into_response()
	}
}


// vim: ts=4
