use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::blood_groups::handlers;
use crate::features::blood_groups::services::BloodGroupService;

/// Public reference routes
pub fn routes(service: Arc<BloodGroupService>) -> Router {
    Router::new()
        .route("/api/blood-groups", get(handlers::list_blood_groups))
        .with_state(service)
}
