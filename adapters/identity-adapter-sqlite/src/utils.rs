//! Utility functions for database operations

use sqlx::sqlite::SqliteRow;

use volunet::identity_adapter::UserClaims;
use volunet::prelude::*;

/// Log database errors
pub(crate) fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

/// Map a query result to a value using a closure
pub(crate) fn map_res<T, F>(row: Result<SqliteRow, sqlx::Error>, f: F) -> VnResult<T>
where
	F: FnOnce(&SqliteRow) -> Result<T, sqlx::Error>,
{
	match row {
		Ok(ref row) => f(row).inspect_err(inspect).map_err(|_| Error::DbError),
		Err(sqlx::Error::RowNotFound) => Err(Error::NotFound),
		Err(err) => {
			inspect(&err);
			Err(Error::DbError)
		}
	}
}

/// Parse the claims column. An unreadable or missing value counts as no claims.
pub(crate) fn parse_claims(claims: Option<&str>) -> UserClaims {
	claims.and_then(|s| serde_json::from_str(s).ok()).unwrap_or_default()
}

// vim: ts=4
