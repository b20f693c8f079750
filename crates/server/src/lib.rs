//! HTTP service exposing the page analyzer.
//!
//! One route does the work: `GET /analyzer?url=...` fetches the page,
//! runs the on-page analysis, asks the content-quality evaluator for its
//! verdict, and returns a single JSON object. Everything is request
//! scoped; the service holds no state beyond its configuration.

pub mod error;
pub mod routes;
pub mod server;

pub use error::{AppError, Result};
pub use server::{AppState, create_app, run_server};
