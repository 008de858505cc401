use crate::features::auth::handlers;
use crate::features::auth::services::AuthService;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Public auth routes (no authentication required)
pub fn public_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/admin/login", post(handlers::login))
        .with_state(service)
}

/// Protected auth routes, nested under `/api/admin`
pub fn protected_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/me", get(handlers::get_me))
        .with_state(service)
}
