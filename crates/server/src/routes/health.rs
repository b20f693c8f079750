//! Health check endpoint: GET /health

use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::error::Result;
use crate::server::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// GET /health - Health check endpoint
pub async fn health_check(State(_state): State<AppState>) -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
