//! Adapter that stores profile documents in role-scoped collections.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

/// A Volunet profile adapter
///
/// Stores one profile document per identity, keyed by uid, in a collection
/// determined by the registrant's role (`Role::collection()`). The document
/// body is the validated registration data without the password.
#[async_trait]
pub trait ProfileAdapter: Debug + Send + Sync {
	/// Writes a profile document. This is a full replace: an existing
	/// document under the same (collection, uid) key is overwritten, never
	/// merged.
	async fn write_profile(
		&self,
		role: Role,
		uid: &str,
		fields: &serde_json::Value,
	) -> VnResult<()>;

	/// Reads a profile document. Returns `None` when no document exists
	/// under the given key.
	async fn read_profile(&self, role: Role, uid: &str) -> VnResult<Option<serde_json::Value>>;
}

// vim: ts=4
