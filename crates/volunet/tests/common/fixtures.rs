//! Payload fixtures and request helpers

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use volunet::{App, AppBuilderOpts, AppState};

use super::adapters::{MemoryIdentityAdapter, MemoryProfileAdapter};

pub fn volunteer_payload() -> Value {
	json!({
		"name": "A",
		"email": "a@b.com",
		"phone": "1",
		"address": "x",
		"availability": [1],
		"preferredTime": ["am"],
		"interests": ["food"],
		"password": "secret",
	})
}

pub fn institution_payload() -> Value {
	json!({
		"name": "Helping Org",
		"email": "org@example.com",
		"website": "https://example.com",
		"phoneNumber": "123456",
		"country": "CA",
		"province": "ON",
		"city": "Toronto",
		"address": "1 Main St",
		"postalCode": "A1A 1A1",
		"organizationType": "shelter",
		"organizationSize": "10-50",
		"typeOfHelp": ["food", "clothing"],
		"password": "secret",
	})
}

/// Build a router over fresh in-memory adapters.
pub fn test_app() -> (Router, Arc<MemoryIdentityAdapter>, Arc<MemoryProfileAdapter>) {
	let identity = Arc::new(MemoryIdentityAdapter::new());
	let profile = Arc::new(MemoryProfileAdapter::new());
	let state: App = Arc::new(AppState {
		opts: AppBuilderOpts { listen: "127.0.0.1:0".into() },
		identity_adapter: identity.clone(),
		profile_adapter: profile.clone(),
	});
	(volunet::routes::init(state), identity, profile)
}

/// Drive one request through the router and decode the JSON response body.
pub async fn request(
	router: &Router,
	method: Method,
	uri: &str,
	token: Option<&str>,
	body: Option<Value>,
) -> (StatusCode, Value) {
	let mut builder = Request::builder().method(method).uri(uri);
	if let Some(token) = token {
		builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
	}
	let req = match body {
		Some(body) => builder
			.header(header::CONTENT_TYPE, "application/json")
			.body(Body::from(body.to_string()))
			.unwrap(),
		None => builder.body(Body::empty()).unwrap(),
	};

	let response = router.clone().oneshot(req).await.unwrap();
	let status = response.status();
	let bytes = response.into_body().collect().await.unwrap().to_bytes();
	let value = if bytes.is_empty() {
		Value::Null
	} else {
		serde_json::from_slice(&bytes).unwrap()
	};
	(status, value)
}

pub async fn post_json(
	router: &Router,
	uri: &str,
	token: Option<&str>,
	body: Value,
) -> (StatusCode, Value) {
	request(router, Method::POST, uri, token, Some(body)).await
}

pub async fn get_json(router: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
	request(router, Method::GET, uri, token, None).await
}

// vim: ts=4
