pub mod analysis;
pub mod analyzer;
pub mod density;
pub mod error;
pub mod fetch;
pub mod formatters;
pub mod parse;
pub mod text;

pub use analysis::{DensityReport, NgramSize, Region, SectionResult};
pub use analyzer::{Analyzer, AnalyzerConfig, AnalyzerConfigBuilder, analyze};
#[cfg(feature = "fetch")]
pub use analyzer::fetch_and_analyze;
pub use density::{DensityEntry, PhraseCounter, calculate_density};
pub use error::{DensitoError, Result};
pub use fetch::FetchConfig;
#[cfg(feature = "fetch")]
pub use fetch::fetch_url;
pub use fetch::{fetch_file, fetch_stdin};
pub use formatters::{JsonConfig, JsonFormatter, TextConfig, TextFormatter, convert_to_json, convert_to_text};
pub use parse::{AnyTag, Document, Element, HEADING_TAGS, TagName, TagPredicate};
pub use text::{normalize, phrases, tokens};
