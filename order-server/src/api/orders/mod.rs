//! Order API Module
//!
//! All order mutations and queries go through [`crate::orders::OrderService`].

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new()
        // Intake + filtered listing
        .route("/orders", post(handler::create).get(handler::list))
        // Point lookup (never 404s while placeholder synthesis is on)
        .route("/orders/{id}", get(handler::get_by_id))
        // Unconditional cancellation
        .route("/orders/{id}/cancel", post(handler::cancel))
}
