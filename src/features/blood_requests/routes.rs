use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::blood_requests::handlers;
use crate::features::blood_requests::services::BloodRequestService;

/// Public intake route
pub fn public_routes(service: Arc<BloodRequestService>) -> Router {
    Router::new()
        .route("/api/blood-requests", post(handlers::submit_blood_request))
        .with_state(service)
}

/// Admin triage routes, nested under `/api/admin`
pub fn admin_routes(service: Arc<BloodRequestService>) -> Router {
    Router::new()
        .route("/blood-requests", get(handlers::list_blood_requests))
        .route(
            "/blood-requests/{id}",
            put(handlers::update_blood_request_status),
        )
        .with_state(service)
}
