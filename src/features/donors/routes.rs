use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::donors::handlers;
use crate::features::donors::services::DonorService;

/// Public donor routes (registration and directory search)
pub fn public_routes(service: Arc<DonorService>) -> Router {
    Router::new()
        .route("/api/donors", post(handlers::register_donor))
        .route("/api/donors/search", get(handlers::search_donors))
        .with_state(service)
}

/// Admin donor routes, nested under `/api/admin`
pub fn admin_routes(service: Arc<DonorService>) -> Router {
    Router::new()
        .route("/donors", get(handlers::list_donors))
        .route(
            "/donors/{id}",
            put(handlers::update_donor_availability).delete(handlers::delete_donor),
        )
        .with_state(service)
}
