use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::features::contact::handlers;
use crate::features::contact::services::ContactService;

/// Public contact form route
pub fn public_routes(service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/api/contact", post(handlers::submit_contact_message))
        .with_state(service)
}

/// Admin inbox routes, nested under `/api/admin`
pub fn admin_routes(service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/contact-messages", get(handlers::list_contact_messages))
        .route(
            "/contact-messages/{id}/read",
            put(handlers::mark_contact_message_read),
        )
        .route(
            "/contact-messages/{id}",
            delete(handlers::delete_contact_message),
        )
        .with_state(service)
}
