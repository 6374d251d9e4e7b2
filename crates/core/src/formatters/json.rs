use crate::Result;
use crate::analysis::DensityReport;

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

/// JSON formatter for density reports
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, report: &DensityReport) -> Result<String> {
        convert_to_json(report, &self.config)
    }
}

/// Serialize a report to JSON
///
/// Regions are keyed `headings`, `links`, `images` and `body`; each holds
/// `1-word`, `2-word` and `3-word` arrays of `{phrase, count, density}`.
pub fn convert_to_json(report: &DensityReport, config: &JsonConfig) -> Result<String> {
    let json = if config.pretty { serde_json::to_string_pretty(report)? } else { serde_json::to_string(report)? };
    Ok(json)
}
