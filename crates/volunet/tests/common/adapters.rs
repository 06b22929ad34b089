//! In-memory adapter implementations for tests
//!
//! Besides implementing the adapter traits, these record call counts and can
//! be switched into failure modes, so tests can assert which downstream
//! calls a handler made.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use volunet::error::{Error, VnResult};
use volunet::identity_adapter::{AuthCtx, IdentityAdapter, IdentityRecord, NewUser, UserClaims};
use volunet::profile_adapter::ProfileAdapter;
use volunet::types::{Role, Timestamp};

// MemoryIdentityAdapter //
//***********************//
#[derive(Debug, Default)]
pub struct MemoryIdentityAdapter {
	users: Mutex<HashMap<String, IdentityRecord>>,
	next_uid: AtomicU32,
	pub create_calls: AtomicU32,
	pub read_calls: AtomicU32,
}

impl MemoryIdentityAdapter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Seed an identity without going through a registration flow.
	/// Returns the uid; `token_for` yields a matching bearer token.
	pub fn insert_user(&self, email: &str, display_name: &str, role: Option<Role>) -> String {
		let uid = format!("uid-{}", self.next_uid.fetch_add(1, Ordering::SeqCst) + 1);
		let record = IdentityRecord {
			uid: uid.clone().into(),
			email: email.into(),
			display_name: display_name.into(),
			claims: UserClaims { role },
			created_at: Timestamp(1700000000),
		};
		self.users.lock().unwrap().insert(uid.clone(), record);
		uid
	}

	pub fn user(&self, uid: &str) -> Option<IdentityRecord> {
		self.users.lock().unwrap().get(uid).cloned()
	}

	pub fn user_count(&self) -> usize {
		self.users.lock().unwrap().len()
	}

	pub fn token_for(uid: &str) -> String {
		format!("token-{}", uid)
	}
}

#[async_trait]
impl IdentityAdapter for MemoryIdentityAdapter {
	async fn create_user(&self, user: NewUser<'_>) -> VnResult<IdentityRecord> {
		self.create_calls.fetch_add(1, Ordering::SeqCst);

		let mut users = self.users.lock().unwrap();
		if users.values().any(|u| u.email.as_ref() == user.email) {
			return Err(Error::Conflict(
				"The email address is already in use by another account.".to_string(),
			));
		}

		let uid = format!("uid-{}", self.next_uid.fetch_add(1, Ordering::SeqCst) + 1);
		let record = IdentityRecord {
			uid: uid.clone().into(),
			email: user.email.into(),
			display_name: user.display_name.into(),
			claims: UserClaims::default(),
			created_at: Timestamp(1700000000),
		};
		users.insert(uid, record.clone());
		Ok(record)
	}

	async fn read_user(&self, uid: &str) -> VnResult<IdentityRecord> {
		self.read_calls.fetch_add(1, Ordering::SeqCst);
		self.users.lock().unwrap().get(uid).cloned().ok_or(Error::NotFound)
	}

	async fn update_claims(&self, uid: &str, claims: &UserClaims) -> VnResult<()> {
		let mut users = self.users.lock().unwrap();
		let user = users.get_mut(uid).ok_or(Error::NotFound)?;
		user.claims = claims.clone();
		Ok(())
	}

	async fn create_custom_token(&self, uid: &str) -> VnResult<Box<str>> {
		Ok(Self::token_for(uid).into())
	}

	async fn validate_access_token(&self, token: &str) -> VnResult<AuthCtx> {
		let uid = token.strip_prefix("token-").ok_or(Error::Unauthorized)?;
		if self.users.lock().unwrap().contains_key(uid) {
			Ok(AuthCtx { uid: uid.into() })
		} else {
			Err(Error::Unauthorized)
		}
	}
}

// MemoryProfileAdapter //
//**********************//
#[derive(Debug, Default)]
pub struct MemoryProfileAdapter {
	documents: Mutex<HashMap<(String, String), Value>>,
	pub fail_writes: AtomicBool,
	pub fail_reads: AtomicBool,
	pub write_calls: AtomicU32,
}

impl MemoryProfileAdapter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert_document(&self, role: Role, uid: &str, fields: Value) {
		self.documents
			.lock()
			.unwrap()
			.insert((role.collection().to_string(), uid.to_string()), fields);
	}

	pub fn document(&self, role: Role, uid: &str) -> Option<Value> {
		self.documents
			.lock()
			.unwrap()
			.get(&(role.collection().to_string(), uid.to_string()))
			.cloned()
	}

	pub fn document_count(&self) -> usize {
		self.documents.lock().unwrap().len()
	}
}

#[async_trait]
impl ProfileAdapter for MemoryProfileAdapter {
	async fn write_profile(&self, role: Role, uid: &str, fields: &Value) -> VnResult<()> {
		self.write_calls.fetch_add(1, Ordering::SeqCst);
		if self.fail_writes.load(Ordering::SeqCst) {
			return Err(Error::ServiceUnavailable("Profile store unavailable".to_string()));
		}
		self.documents
			.lock()
			.unwrap()
			.insert((role.collection().to_string(), uid.to_string()), fields.clone());
		Ok(())
	}

	async fn read_profile(&self, role: Role, uid: &str) -> VnResult<Option<Value>> {
		if self.fail_reads.load(Ordering::SeqCst) {
			return Err(Error::ServiceUnavailable("Profile store unavailable".to_string()));
		}
		Ok(self.document(role, uid))
	}
}

// vim: ts=4
