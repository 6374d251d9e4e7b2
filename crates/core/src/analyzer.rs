//! Main density analysis API.
//!
//! The entry point is the [`Analyzer`] struct, along with the convenience
//! functions [`analyze`] and [`fetch_and_analyze`]. Analysis is all or
//! nothing: a fetch or parse failure discards every section.
//!
//! # Example
//!
//! ```rust
//! use densito_core::analyze;
//!
//! let report = analyze("<html><body><h1>Hello World</h1></body></html>").unwrap();
//! assert_eq!(report.headings.two_word[0].phrase, "hello world");
//! ```

#[cfg(feature = "fetch")]
use tracing::debug;

use crate::Result;
use crate::analysis::{DensityReport, analyze_document};
use crate::density::DEFAULT_MAX_ENTRIES;
use crate::fetch::FetchConfig;
use crate::parse::Document;

/// Configuration for the [`Analyzer`].
///
/// # Example
///
/// ```rust
/// use densito_core::AnalyzerConfig;
///
/// let config = AnalyzerConfig::builder()
///     .max_entries(10)
///     .timeout(15)
///     .build();
/// assert_eq!(config.max_entries, 10);
/// ```
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Entries kept per table (default: 5).
    pub max_entries: usize,

    /// HTTP settings used by [`Analyzer::analyze_url`].
    pub fetch: FetchConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self { max_entries: DEFAULT_MAX_ENTRIES, fetch: FetchConfig::default() }
    }
}

impl AnalyzerConfig {
    /// Creates a new builder for AnalyzerConfig.
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::new()
    }
}

/// Builder for AnalyzerConfig.
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: AnalyzerConfig::default() }
    }

    /// Sets the number of entries kept per table.
    pub fn max_entries(mut self, value: usize) -> Self {
        self.config.max_entries = value;
        self
    }

    /// Sets the HTTP timeout in seconds.
    pub fn timeout(mut self, secs: u64) -> Self {
        self.config.fetch.timeout = Some(secs);
        self
    }

    /// Sets the User-Agent sent with requests.
    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.config.fetch.user_agent = value.into();
        self
    }

    /// Builds the config.
    pub fn build(self) -> AnalyzerConfig {
        self.config
    }
}

impl Default for AnalyzerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the four region analyses over a page.
///
/// # Example
///
/// ```rust
/// use densito_core::{Analyzer, AnalyzerConfig};
///
/// let analyzer = Analyzer::with_config(AnalyzerConfig::builder().max_entries(1).build());
/// let report = analyzer.analyze_html("<body><p>a a b</p></body>").unwrap();
/// assert_eq!(report.body.one_word.len(), 1);
/// ```
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Creates a new Analyzer with default settings.
    pub fn new() -> Self {
        Self { config: AnalyzerConfig::default() }
    }

    /// Creates a new Analyzer with a custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Parses an HTML string and analyzes it.
    pub fn analyze_html(&self, html: &str) -> Result<DensityReport> {
        let doc = Document::parse(html)?;
        Ok(self.analyze_document(&doc))
    }

    /// Analyzes an already parsed document.
    pub fn analyze_document(&self, doc: &Document) -> DensityReport {
        analyze_document(doc, self.config.max_entries)
    }

    /// Fetches a page and analyzes it.
    ///
    /// # Errors
    ///
    /// Any fetch failure (invalid URL, transport error, non-2xx status) is
    /// returned as is and no partial report is produced.
    #[cfg(feature = "fetch")]
    pub async fn analyze_url(&self, url: &str) -> Result<DensityReport> {
        let html = crate::fetch::fetch_url(url, &self.config.fetch).await?;
        debug!(url, bytes = html.len(), "analyzing fetched page");

        let mut report = self.analyze_html(&html)?;
        report.url = Some(url.to_string());
        Ok(report)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function for one-liner analysis with defaults.
pub fn analyze(html: &str) -> Result<DensityReport> {
    Analyzer::new().analyze_html(html)
}

/// Convenience function to fetch and analyze a URL with defaults.
#[cfg(feature = "fetch")]
pub async fn fetch_and_analyze(url: &str) -> Result<DensityReport> {
    Analyzer::new().analyze_url(url).await
}
