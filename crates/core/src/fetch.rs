//! Content fetching from URLs, files, and stdin.
//!
//! The URL fetcher is the network collaborator of the analyzer: one GET,
//! redirects followed, anything other than a 2xx answer is an error.

use std::fs;
use std::path::PathBuf;

#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::Client;
#[cfg(feature = "fetch")]
use tracing::debug;
#[cfg(feature = "fetch")]
use url::Url;

#[cfg(feature = "fetch")]
use crate::DensitoError;
use crate::Result;

/// HTTP client configuration for fetching web pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds. `None` leaves the transport default in place.
    pub timeout: Option<u64>,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: None, user_agent: format!("Mozilla/5.0 (compatible; Densito/{})", env!("CARGO_PKG_VERSION")) }
    }
}

/// Fetches HTML content from a URL.
///
/// Performs an HTTP GET request and returns the response body as text.
/// Redirects are followed with reqwest's default policy. Non-success status
/// codes are reported as [`DensitoError::HttpStatus`].
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| DensitoError::InvalidUrl(e.to_string()))?;

    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(DensitoError::InvalidUrl(format!(
            "unsupported scheme '{}' (expected http:// or https://)",
            parsed_url.scheme()
        )));
    }

    let mut builder = Client::builder();
    if let Some(secs) = config.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build().map_err(DensitoError::HttpError)?;

    debug!(url = %parsed_url, "fetching page");

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .send()
        .await
        .map_err(|e| map_transport_error(e, config))?;

    let status = response.status();
    if !status.is_success() {
        return Err(DensitoError::HttpStatus { status: status.to_string(), url: response.url().to_string() });
    }

    let content = response.text().await.map_err(|e| map_transport_error(e, config))?;
    debug!(bytes = content.len(), %status, "page fetched");

    Ok(content)
}

#[cfg(feature = "fetch")]
fn map_transport_error(err: reqwest::Error, config: &FetchConfig) -> DensitoError {
    match config.timeout {
        Some(timeout) if err.is_timeout() => DensitoError::Timeout { timeout },
        _ => DensitoError::HttpError(err),
    }
}

/// Reads HTML content from a local file.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(crate::DensitoError::FileNotFound(path_buf))
    } else {
        Ok(fs::read_to_string(&path_buf)?)
    }
}

/// Reads HTML content from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    Ok(buffer)
}
