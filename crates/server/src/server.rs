//! Server setup with Tower middleware

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use seoscope_core::{EvaluatorConfig, FetchConfig};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

use crate::routes;

/// Outer request deadline: page fetch (10s) plus evaluation (30s) plus
/// headroom for the analysis itself.
const REQUEST_DEADLINE: Duration = Duration::from_secs(60);

/// Per-request configuration shared with the handlers.
///
/// Holds only configuration; every analysis value is constructed fresh
/// inside the handler and dropped with the response.
#[derive(Debug, Clone)]
pub struct AppState {
    pub fetch: FetchConfig,
    pub evaluator: EvaluatorConfig,
}

impl AppState {
    /// Builds the state from the process environment.
    pub fn from_env() -> Self {
        Self { fetch: FetchConfig::default(), evaluator: EvaluatorConfig::from_env() }
    }
}

/// Run the axum server
pub async fn run_server(addr: SocketAddr, state: AppState) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_app(state);

    let listener = TcpListener::bind(addr).await?;
    info!("seoscope server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the axum application with middleware
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::create_router().with_state(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TimeoutLayer::new(REQUEST_DEADLINE))
        .layer(TraceLayer::new_for_http())
}
