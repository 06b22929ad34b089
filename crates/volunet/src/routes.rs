use axum::{
	Json, Router, middleware,
	routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

use volunet_core::{App, VERSION};
use volunet_registration::handler;

async fn get_health() -> Json<Value> {
	Json(json!({ "name": "volunet", "version": VERSION }))
}

pub fn init(state: App) -> Router {
	Router::new()
		.route("/api/register/volunteer", post(handler::post_register_volunteer))
		.route("/api/register/institution", post(handler::post_register_institution))
		.route("/api/register/volunteer/me", post(handler::post_register_volunteer_current))
		.route("/api/register/institution/me", post(handler::post_register_institution_current))
		.route("/api/me", get(handler::get_user_details))
		.route("/api/health", get(get_health))
		.layer(middleware::from_fn_with_state(
			state.clone(),
			volunet_core::middleware::optional_auth,
		))
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}

// vim: ts=4
