//! Database schema initialization

use sqlx::SqlitePool;

/// Initialize the database schema. Safe to run every time (uses IF NOT EXISTS).
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	// Instance-level variables (JWT signing secret)
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS vars (
			key text NOT NULL,
			value text NOT NULL,
			created_at INTEGER DEFAULT (unixepoch()),
			PRIMARY KEY(key)
		)",
	)
	.execute(db)
	.await?;

	// User accounts
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS users (
			uid text NOT NULL,
			email text NOT NULL UNIQUE,
			password text NOT NULL,
			display_name text,
			claims text,
			created_at INTEGER DEFAULT (unixepoch()),
			PRIMARY KEY(uid)
		)",
	)
	.execute(db)
	.await?;

	Ok(())
}

// vim: ts=4
