//! Profile document operations

use sqlx::{Row, SqlitePool};

use volunet::prelude::*;

/// Log database errors
fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

/// Write a profile document. INSERT OR REPLACE: the previous document under
/// the same key is dropped entirely (last write wins).
pub(crate) async fn write_profile(
	db: &SqlitePool,
	collection: &str,
	doc_id: &str,
	fields: &serde_json::Value,
) -> VnResult<()> {
	let body = serde_json::to_string(fields).map_err(|_| Error::Parse)?;

	sqlx::query(
		"INSERT OR REPLACE INTO documents (collection, doc_id, body, updated_at)
		VALUES (?1, ?2, ?3, unixepoch())",
	)
	.bind(collection)
	.bind(doc_id)
	.bind(&body)
	.execute(db)
	.await
	.inspect_err(inspect)
	.or(Err(Error::DbError))?;

	Ok(())
}

/// Read a profile document, `None` when it does not exist
pub(crate) async fn read_profile(
	db: &SqlitePool,
	collection: &str,
	doc_id: &str,
) -> VnResult<Option<serde_json::Value>> {
	let row = sqlx::query("SELECT body FROM documents WHERE collection = ?1 AND doc_id = ?2")
		.bind(collection)
		.bind(doc_id)
		.fetch_optional(db)
		.await
		.inspect_err(inspect)
		.or(Err(Error::DbError))?;

	match row {
		Some(row) => {
			let body: String = row.try_get("body").inspect_err(inspect).or(Err(Error::DbError))?;
			let value = serde_json::from_str(&body).map_err(|_| Error::Parse)?;
			Ok(Some(value))
		}
		None => Ok(None),
	}
}

// vim: ts=4
