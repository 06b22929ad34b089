//! Utility functions

use rand::RngExt;

use crate::prelude::*;

pub const UID_LENGTH: usize = 28;
pub const SAFE: [char; 62] = [
	'0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
	'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B',
	'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U',
	'V', 'W', 'X', 'Y', 'Z',
];

/// Generate a random opaque identifier for a new identity record.
pub fn random_uid() -> VnResult<String> {
	let mut rng = rand::rng();
	let mut result = String::with_capacity(UID_LENGTH);

	for _ in 0..UID_LENGTH {
		result.push(SAFE[rng.random_range(0..SAFE.len())]);
	}
	Ok(result)
}


// vim: ts=4
