//! Common types used throughout the Volunet platform.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use crate::error::Error;

// Role //
//******//

/// Registrant kind. Determines the role claim attached to an identity
/// and the profile collection the registration data is stored in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	Volunteer,
	Institution,
}

impl Role {
	pub fn as_str(self) -> &'static str {
		match self {
			Role::Volunteer => "volunteer",
			Role::Institution => "institution",
		}
	}

	/// Profile collection for this role.
	///
	/// Explicit enumeration instead of `role + "s"` string building, so a
	/// future role with irregular plural cannot silently break the layout.
	pub fn collection(self) -> &'static str {
		match self {
			Role::Volunteer => "volunteers",
			Role::Institution => "institutions",
		}
	}
}

impl std::fmt::Display for Role {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl std::str::FromStr for Role {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"volunteer" => Ok(Role::Volunteer),
			"institution" => Ok(Role::Institution),
			_ => Err(Error::Parse),
		}
	}
}

// Timestamp //
//***********//
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub i64);

impl Timestamp {
	pub fn now() -> Timestamp {
		let res = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default();
		Timestamp(res.as_secs() as i64)
	}

	pub fn add_seconds(self, seconds: i64) -> Timestamp {
		Timestamp(self.0 + seconds)
	}
}

impl std::fmt::Display for Timestamp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for Timestamp {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_i64(self.0)
	}
}

impl<'de> Deserialize<'de> for Timestamp {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(Timestamp(i64::deserialize(deserializer)?))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_role_collection_mapping() {
		assert_eq!(Role::Volunteer.collection(), "volunteers");
		assert_eq!(Role::Institution.collection(), "institutions");
	}

	#[test]
	fn test_role_round_trip() {
		assert_eq!("volunteer".parse::<Role>().ok(), Some(Role::Volunteer));
		assert_eq!("institution".parse::<Role>().ok(), Some(Role::Institution));
		assert!("admin".parse::<Role>().is_err());
	}

	#[test]
	fn test_role_serde_lowercase() {
		assert_eq!(serde_json::to_string(&Role::Volunteer).unwrap(), "\"volunteer\"");
		let role: Role = serde_json::from_str("\"institution\"").unwrap();
		assert_eq!(role, Role::Institution);
	}
}

// vim: ts=4
