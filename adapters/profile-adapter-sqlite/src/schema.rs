//! Database schema initialization

use sqlx::SqlitePool;

/// Initialize the database schema. Safe to run every time (uses IF NOT EXISTS).
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS documents (
			collection text NOT NULL,
			doc_id text NOT NULL,
			body text NOT NULL,
			updated_at INTEGER DEFAULT (unixepoch()),
			PRIMARY KEY(collection, doc_id)
		)",
	)
	.execute(db)
	.await?;

	Ok(())
}

// vim: ts=4
