//! Registration schemas and the validation gate.
//!
//! Each registrant kind has a typed record and a parse function that checks
//! an untyped JSON payload field by field, in schema declaration order, and
//! short-circuits on the first violated constraint. The password for the
//! self-service flows is parsed separately (`parse_password`) so it can
//! never end up in a profile document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerRegistration {
	pub name: String,
	pub email: String,
	pub phone: String,
	pub address: String,
	pub availability: Vec<i64>,
	pub preferred_time: Vec<String>,
	pub interests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionRegistration {
	pub name: String,
	pub email: String,
	pub website: String,
	pub phone_number: String,
	pub country: String,
	pub province: String,
	pub city: String,
	pub address: String,
	pub postal_code: String,
	pub organization_type: String,
	pub organization_size: String,
	pub type_of_help: Vec<String>,
}

impl VolunteerRegistration {
	/// Profile document body for this registration. Contains exactly the
	/// validated fields; the password is not part of the record.
	pub fn document(&self) -> VnResult<Value> {
		Ok(serde_json::to_value(self)?)
	}
}

impl InstitutionRegistration {
	pub fn document(&self) -> VnResult<Value> {
		Ok(serde_json::to_value(self)?)
	}
}

/// Minimal email grammar: nonempty local part, single '@', domain with an
/// inner dot, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
	if email.chars().any(char::is_whitespace) {
		return false;
	}
	let Some((local, domain)) = email.split_once('@') else {
		return false;
	};
	if local.is_empty() || domain.contains('@') {
		return false;
	}
	match domain.split_once('.') {
		Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'),
		None => false,
	}
}

fn field<'a>(payload: &'a Value, key: &str) -> VnResult<&'a Value> {
	match payload.get(key) {
		None | Some(Value::Null) => Err(Error::ValidationError(format!("{} is required", key))),
		Some(value) => Ok(value),
	}
}

fn require_string(payload: &Value, key: &str) -> VnResult<String> {
	match field(payload, key)? {
		Value::String(s) if !s.trim().is_empty() => Ok(s.clone()),
		Value::String(_) => Err(Error::ValidationError(format!("{} must not be empty", key))),
		_ => Err(Error::ValidationError(format!("{} must be a string", key))),
	}
}

fn require_email(payload: &Value, key: &str) -> VnResult<String> {
	let email = require_string(payload, key)?;
	if is_valid_email(&email) {
		Ok(email)
	} else {
		Err(Error::ValidationError(format!("{} must be a valid email address", key)))
	}
}

fn require_string_array(payload: &Value, key: &str) -> VnResult<Vec<String>> {
	let Value::Array(items) = field(payload, key)? else {
		return Err(Error::ValidationError(format!("{} must be an array of strings", key)));
	};
	items
		.iter()
		.map(|item| match item {
			Value::String(s) => Ok(s.clone()),
			_ => Err(Error::ValidationError(format!("{} must be an array of strings", key))),
		})
		.collect()
}

fn require_number_array(payload: &Value, key: &str) -> VnResult<Vec<i64>> {
	let Value::Array(items) = field(payload, key)? else {
		return Err(Error::ValidationError(format!("{} must be an array of numbers", key)));
	};
	items
		.iter()
		.map(|item| {
			item.as_i64()
				.ok_or_else(|| Error::ValidationError(format!("{} must be an array of numbers", key)))
		})
		.collect()
}

/// Validate and type a volunteer registration payload.
/// Unknown keys are ignored; checks run in schema declaration order.
pub fn parse_volunteer(payload: &Value) -> VnResult<VolunteerRegistration> {
	Ok(VolunteerRegistration {
		name: require_string(payload, "name")?,
		email: require_email(payload, "email")?,
		phone: require_string(payload, "phone")?,
		address: require_string(payload, "address")?,
		availability: require_number_array(payload, "availability")?,
		preferred_time: require_string_array(payload, "preferredTime")?,
		interests: require_string_array(payload, "interests")?,
	})
}

/// Validate and type an institution registration payload.
pub fn parse_institution(payload: &Value) -> VnResult<InstitutionRegistration> {
	Ok(InstitutionRegistration {
		name: require_string(payload, "name")?,
		email: require_email(payload, "email")?,
		website: require_string(payload, "website")?,
		phone_number: require_string(payload, "phoneNumber")?,
		country: require_string(payload, "country")?,
		province: require_string(payload, "province")?,
		city: require_string(payload, "city")?,
		address: require_string(payload, "address")?,
		postal_code: require_string(payload, "postalCode")?,
		organization_type: require_string(payload, "organizationType")?,
		organization_size: require_string(payload, "organizationSize")?,
		type_of_help: require_string_array(payload, "typeOfHelp")?,
	})
}

/// Password field of the self-service registration flows. Checked after
/// the base schema, matching its position in the extended schema.
pub fn parse_password(payload: &Value) -> VnResult<String> {
	require_string(payload, "password")
}


// vim: ts=4
