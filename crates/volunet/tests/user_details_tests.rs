//! Tests for the merged identity + profile view

mod common;

use std::sync::atomic::Ordering;

use axum::http::StatusCode;
use serde_json::json;

use common::*;
use volunet::types::Role;

#[tokio::test]
async fn test_user_details_unauthenticated() {
	let (router, _identity, _profile) = test_app();

	let (status, body) = get_json(&router, "/api/me", None).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body, json!({ "error": "User is not authenticated" }));
}

#[tokio::test]
async fn test_user_details_profile_fields_win_on_collision() {
	let (router, identity, profile) = test_app();

	let uid = identity.insert_user("a@b.com", "A", Some(Role::Volunteer));
	profile.insert_document(
		Role::Volunteer,
		&uid,
		json!({ "email": "override@b.com", "phone": "1" }),
	);

	let (status, body) =
		get_json(&router, "/api/me", Some(&MemoryIdentityAdapter::token_for(&uid))).await;

	assert_eq!(status, StatusCode::OK);
	// Profile fields override identity fields, identity-only fields remain
	assert_eq!(body["email"], "override@b.com");
	assert_eq!(body["phone"], "1");
	assert_eq!(body["uid"], uid);
	assert_eq!(body["displayName"], "A");
}

#[tokio::test]
async fn test_user_details_without_profile_returns_identity_fields() {
	let (router, identity, _profile) = test_app();

	let uid = identity.insert_user("a@b.com", "A", Some(Role::Volunteer));

	let (status, body) =
		get_json(&router, "/api/me", Some(&MemoryIdentityAdapter::token_for(&uid))).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["uid"], uid);
	assert_eq!(body["email"], "a@b.com");
	assert!(body.get("phone").is_none());
}

#[tokio::test]
async fn test_user_details_defaults_to_volunteer_collection() {
	let (router, identity, profile) = test_app();

	// No role claim set: the volunteers collection is consulted
	let uid = identity.insert_user("a@b.com", "A", None);
	profile.insert_document(Role::Volunteer, &uid, json!({ "phone": "1" }));
	profile.insert_document(Role::Institution, &uid, json!({ "phone": "2" }));

	let (_status, body) =
		get_json(&router, "/api/me", Some(&MemoryIdentityAdapter::token_for(&uid))).await;

	assert_eq!(body["phone"], "1");
}

#[tokio::test]
async fn test_user_details_reads_institution_collection_for_institution_claim() {
	let (router, identity, profile) = test_app();

	let uid = identity.insert_user("org@example.com", "Org", Some(Role::Institution));
	profile.insert_document(Role::Institution, &uid, json!({ "city": "Toronto" }));

	let (_status, body) =
		get_json(&router, "/api/me", Some(&MemoryIdentityAdapter::token_for(&uid))).await;

	assert_eq!(body["city"], "Toronto");
	assert_eq!(body["claims"]["role"], "institution");
}

#[tokio::test]
async fn test_user_details_downstream_failure_propagates_as_http_error() {
	let (router, identity, profile) = test_app();

	let uid = identity.insert_user("a@b.com", "A", Some(Role::Volunteer));
	profile.fail_reads.store(true, Ordering::SeqCst);

	let (status, body) =
		get_json(&router, "/api/me", Some(&MemoryIdentityAdapter::token_for(&uid))).await;

	// Unlike the registration flows, this failure is not wrapped into a
	// success-level error body
	assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
	assert_eq!(body["error"], "Profile store unavailable");
}

#[tokio::test]
async fn test_registration_token_works_for_user_details() {
	let (router, _identity, _profile) = test_app();

	let (_status, body) =
		post_json(&router, "/api/register/volunteer", None, volunteer_payload()).await;
	let token = body["token"].as_str().unwrap().to_string();
	let uid = body["uuid"].as_str().unwrap().to_string();

	let (status, details) = get_json(&router, "/api/me", Some(&token)).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(details["uid"], uid);
	assert_eq!(details["name"], "A");
	assert_eq!(details["claims"]["role"], "volunteer");
}

// vim: ts=4
