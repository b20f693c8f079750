//! Error types for analysis operations.
//!
//! This module defines the main error type [`SeoscopeError`] which represents
//! all possible errors that can occur while fetching a page, parsing it, and
//! running the analysis pipeline.
//!
//! # Example
//!
//! ```rust
//! use seoscope_core::{SeoscopeError, Result};
//!
//! fn require_markup(html: &str) -> Result<&str> {
//!     if html.is_empty() {
//!         return Err(SeoscopeError::HtmlParseError("empty document".to_string()));
//!     }
//!     Ok(html)
//! }
//! ```

use thiserror::Error;

/// Main error type for SEO analysis operations.
///
/// This enum represents all possible errors that can occur during page
/// fetching, HTML querying, and the concurrent analysis fan-out.
#[derive(Error, Debug)]
pub enum SeoscopeError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other transport-level problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success status returned by the fetched page.
    ///
    /// Any non-2xx response is treated as a failed fetch; the analysis
    /// never runs against an error page.
    #[error("Page returned HTTP status {status}")]
    HttpStatus { status: u16 },

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed or is malformed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML query errors.
    ///
    /// Returned when a CSS selector is invalid. Document parsing itself is
    /// lenient and recovers from malformed markup.
    #[error("Failed to query HTML: {0}")]
    HtmlParseError(String),

    /// An analysis worker task was cancelled or panicked.
    #[error("Analysis task failed: {0}")]
    TaskFailed(String),

    /// File not found.
    ///
    /// Returned when attempting to read a file that doesn't exist.
    #[error("File not found: {0}")]
    FileNotFound(std::path::PathBuf),

    /// File read errors.
    ///
    /// Wraps standard I/O errors for file and stdin input.
    #[error("Failed to read input: {0}")]
    ReadError(#[from] std::io::Error),
}

/// Result type alias for SeoscopeError.
///
/// This is a convenience alias for `std::result::Result<T, SeoscopeError>`.
pub type Result<T> = std::result::Result<T, SeoscopeError>;
