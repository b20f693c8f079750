use std::net::SocketAddr;

use seoscope_server::{AppState, run_server};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let state = AppState::from_env();
    if state.evaluator.api_key.is_none() {
        warn!("OPENROUTER_API_KEY is not set; content evaluation will report an error");
    }

    let addr: SocketAddr = std::env::var("SEOSCOPE_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
        .parse()?;

    run_server(addr, state).await
}
