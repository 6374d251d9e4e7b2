use crate::analysis::{DensityReport, NgramSize, Region, SectionResult};
use crate::density::DensityEntry;

const RULE_WIDTH: usize = 40;
const TABLE_WIDTH: usize = 45;
const PHRASE_WIDTH: usize = 25;

/// Configuration for plain text reports
#[derive(Debug, Clone)]
pub struct TextConfig {
    /// Print the "SEO DENSITY REPORT FOR" line when the report has a URL
    pub include_header: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { include_header: true }
    }
}

/// Renders density reports as fixed-width text tables
pub struct TextFormatter {
    config: TextConfig,
}

impl TextFormatter {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    /// Render a report
    pub fn format(&self, report: &DensityReport) -> String {
        convert_to_text(report, &self.config)
    }
}

/// Render a report as text tables, regions in report order and phrase sizes
/// from one to three words
pub fn convert_to_text(report: &DensityReport, config: &TextConfig) -> String {
    let mut output = String::new();

    if config.include_header {
        if let Some(url) = &report.url {
            output.push_str(&format!("\nSEO DENSITY REPORT FOR: {}\n", url));
        }
    }

    for region in Region::ALL {
        write_section(&mut output, region, report.section(region));
    }

    output
}

fn write_section(output: &mut String, region: Region, section: &SectionResult) {
    let rule = "=".repeat(RULE_WIDTH);
    output.push_str(&format!("\n{}\n", rule));
    output.push_str(&format!(" {} DENSITY ANALYSIS\n", region.name().to_uppercase()));
    output.push_str(&rule);
    output.push('\n');

    for size in NgramSize::ALL {
        output.push_str(&format!("\n** {} Word **\n", size.words()));
        output.push_str(&format!("{:<PHRASE_WIDTH$} | {:<6} | {:<10}\n", "Phrase", "Count", "Density (%)"));
        output.push_str(&"-".repeat(TABLE_WIDTH));
        output.push('\n');

        for entry in section.get(size) {
            write_row(output, entry);
        }
    }
}

fn write_row(output: &mut String, entry: &DensityEntry) {
    let density = format!("{:.2}", entry.density);
    output.push_str(&format!(
        "{:<PHRASE_WIDTH$} | {:<6} | {:<10}\n",
        truncate(&entry.phrase, PHRASE_WIDTH),
        entry.count,
        density
    ));
}

/// First `max_chars` characters of `s`
fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_document;
    use crate::parse::Document;

    fn sample_report() -> DensityReport {
        let doc = Document::parse("<html><body><h1>Hello World</h1><h1>hello world!!</h1></body></html>").unwrap();
        let mut report = analyze_document(&doc, 5);
        report.url = Some("https://example.com".to_string());
        report
    }

    #[test]
    fn test_header_and_section_order() {
        let text = convert_to_text(&sample_report(), &TextConfig::default());

        assert!(text.starts_with("\nSEO DENSITY REPORT FOR: https://example.com\n"));
        let positions: Vec<usize> = ["HEADINGS", "LINKS", "IMAGES", "BODY"]
            .iter()
            .map(|name| text.find(&format!(" {} DENSITY ANALYSIS", name)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(text.matches("** 1 Word **").count(), 4);
        assert_eq!(text.matches("** 3 Word **").count(), 4);
    }

    #[test]
    fn test_without_header() {
        let config = TextConfig { include_header: false };
        let text = TextFormatter::new(config).format(&sample_report());

        assert!(!text.contains("SEO DENSITY REPORT FOR"));
        assert!(text.starts_with("\n========================================\n HEADINGS DENSITY ANALYSIS\n"));
    }

    #[test]
    fn test_table_layout() {
        let text = convert_to_text(&sample_report(), &TextConfig::default());

        assert!(text.contains("Phrase                    | Count  | Density (%)\n"));
        assert!(text.contains(&format!("\n{}\n", "-".repeat(45))));
        assert!(text.contains("hello world               | 2      | 100.00    \n"));
    }

    #[test]
    fn test_empty_section_layout() {
        let mut output = String::new();
        write_section(&mut output, Region::Images, &SectionResult::default());

        let table = format!("Phrase                    | Count  | Density (%)\n{}\n", "-".repeat(45));
        let expected = format!(
            "\n{rule}\n IMAGES DENSITY ANALYSIS\n{rule}\n\n** 1 Word **\n{table}\n** 2 Word **\n{table}\n** 3 Word **\n{table}",
            rule = "=".repeat(40),
            table = table
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_long_phrase_truncated() {
        let entry = DensityEntry {
            phrase: "internationalization considerations matter".to_string(),
            count: 1,
            density: 33.333333,
        };
        let mut output = String::new();
        write_row(&mut output, &entry);

        assert_eq!(output, "internationalization cons | 1      | 33.33     \n");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("ééééé", 3), "ééé");
        assert_eq!(truncate("short", 25), "short");
    }
}
