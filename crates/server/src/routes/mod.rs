//! Route registration.

use axum::{Router, routing::get};

use crate::server::AppState;

pub mod analyzer;
pub mod health;

/// Create the router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/analyzer", get(analyzer::analyze_page))
        .route("/health", get(health::health_check))
}
