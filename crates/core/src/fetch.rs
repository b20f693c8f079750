//! Page fetching from URLs, files, and stdin.
//!
//! This module provides functions for retrieving HTML content from
//! various sources: HTTP/HTTPS URLs, local files, and standard input.

use std::fs;
use std::path::PathBuf;

use crate::{Result, SeoscopeError};

/// HTTP client configuration for fetching web pages.
///
/// This struct controls timeout and user agent settings for HTTP requests.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 10, user_agent: "SEOAnalyzerBot/1.0".to_string() }
    }
}

/// Fetches HTML content from a URL.
///
/// This function performs an HTTP GET request and returns the response body
/// as text. It follows redirects, respects the configured timeout, and sends
/// the configured User-Agent. A non-2xx response is an error; the analysis
/// never runs against an error page.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    use std::time::Duration;

    use reqwest::Client;
    use url::Url;

    let parsed_url = Url::parse(url).map_err(|e| SeoscopeError::InvalidUrl(e.to_string()))?;

    if parsed_url.scheme().is_empty() {
        return Err(SeoscopeError::InvalidUrl(
            "URL must include a scheme (http:// or https://)".to_string(),
        ));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(SeoscopeError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                SeoscopeError::Timeout { timeout: config.timeout }
            } else {
                SeoscopeError::HttpError(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SeoscopeError::HttpStatus { status: status.as_u16() });
    }

    let content = response.text().await?;

    Ok(content)
}

/// Reads HTML content from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(SeoscopeError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(SeoscopeError::from)
    }
}

/// Reads HTML content from standard input.
///
/// This function reads all available input from stdin until EOF.
/// Useful for piping content from other commands.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(SeoscopeError::from)?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, 10);
        assert_eq!(config.user_agent, "SEOAnalyzerBot/1.0");
    }

    #[cfg(feature = "fetch")]
    #[test]
    fn test_fetch_url_invalid() {
        let config = FetchConfig::default();
        let result = std::thread::spawn(move || {
            tokio::runtime::Runtime::new()
                .unwrap()
                .block_on(fetch_url("not-a-url", &config))
        })
        .join()
        .unwrap();

        assert!(matches!(result, Err(SeoscopeError::InvalidUrl(_))));
    }

    #[cfg(feature = "fetch")]
    #[test]
    fn test_fetch_url_connection_refused() {
        let config = FetchConfig::default();
        let result = std::thread::spawn(move || {
            tokio::runtime::Runtime::new()
                .unwrap()
                .block_on(fetch_url("http://127.0.0.1:1/", &config))
        })
        .join()
        .unwrap();

        assert!(matches!(result, Err(SeoscopeError::HttpError(_))));
    }

    #[test]
    fn test_fetch_file_not_found() {
        let result = fetch_file("/nonexistent/path/file.html");
        assert!(matches!(result, Err(SeoscopeError::FileNotFound(_))));
    }

    #[test]
    fn test_error_timeout_message() {
        let err = SeoscopeError::Timeout { timeout: 10 };
        assert!(err.to_string().contains("10"));
    }
}
