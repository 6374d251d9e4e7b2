//! Error types for densito operations.
//!
//! Every failure that can happen while fetching, reading or parsing a page is
//! folded into [`DensitoError`]. Analysis is all or nothing: a caller either
//! receives a complete report or one of these errors.
//!
//! # Example
//!
//! ```rust
//! use densito_core::{DensitoError, Result};
//!
//! fn require_scheme(url: &str) -> Result<&str> {
//!     if !url.contains("://") {
//!         return Err(DensitoError::InvalidUrl(format!("missing scheme: {}", url)));
//!     }
//!     Ok(url)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for density analysis.
///
/// # Example
///
/// ```rust
/// use densito_core::{DensitoError, analyze};
///
/// match analyze("<html><body><h1>Hi</h1></body></html>") {
///     Ok(report) => println!("{} heading phrases", report.headings.one_word.len()),
///     Err(DensitoError::HttpStatus { status, .. }) => println!("server said {}", status),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum DensitoError {
    /// HTTP transport errors from reqwest.
    ///
    /// Connection refused, DNS failures, TLS problems and body decoding errors.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP status {status} for url ({url})")]
    HttpStatus { status: String, url: String },

    /// Request timeout.
    ///
    /// Only produced when a timeout was configured on the fetch.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O errors while reading local input.
    #[error("Failed to read input: {0}")]
    ReadError(#[from] std::io::Error),

    /// Report serialization errors.
    #[error("Failed to serialize report: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for DensitoError.
pub type Result<T> = std::result::Result<T, DensitoError>;
