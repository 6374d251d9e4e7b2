//! Per-region phrase density analysis.
//!
//! A page is analyzed as four regions: headings, link text, image alt text
//! and body text. The first three are itemized: every heading, link or alt
//! text is normalized on its own and its phrases go into a shared pool. The
//! body is a single blob of text.
//!
//! # Density denominators
//!
//! The regions do not share a denominator. For headings, links and images a
//! percentage is measured against the number of *items* in the region, so a
//! phrase that appears in every heading reads 100% and a phrase repeated
//! inside headings can exceed 100%. For the body it is measured against the
//! number of phrases of that size. Body and non-body percentages are
//! therefore not comparable with each other.

use serde::Serialize;
use tracing::{debug, warn};

use crate::density::{DensityEntry, calculate_density};
use crate::parse::{Document, HEADING_TAGS, TagName};
use crate::text::{normalize, phrases, tokens};

/// Phrase length in words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NgramSize {
    One,
    Two,
    Three,
}

impl NgramSize {
    pub const ALL: [NgramSize; 3] = [NgramSize::One, NgramSize::Two, NgramSize::Three];

    /// Number of words in a phrase of this size.
    pub fn words(self) -> usize {
        match self {
            NgramSize::One => 1,
            NgramSize::Two => 2,
            NgramSize::Three => 3,
        }
    }

    /// Key used in reports, e.g. `"2-word"`.
    pub fn label(self) -> &'static str {
        match self {
            NgramSize::One => "1-word",
            NgramSize::Two => "2-word",
            NgramSize::Three => "3-word",
        }
    }
}

/// A region of the page that is analyzed separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Headings,
    Links,
    Images,
    Body,
}

impl Region {
    /// Regions in report order.
    pub const ALL: [Region; 4] = [Region::Headings, Region::Links, Region::Images, Region::Body];

    pub fn name(self) -> &'static str {
        match self {
            Region::Headings => "headings",
            Region::Links => "links",
            Region::Images => "images",
            Region::Body => "body",
        }
    }

    /// Raw text items for an itemized region, in document order.
    ///
    /// The body is not itemized and yields its text as a single item when
    /// present.
    pub fn extract_items(self, doc: &Document) -> Vec<String> {
        match self {
            Region::Headings => heading_texts(doc),
            Region::Links => link_texts(doc),
            Region::Images => image_alts(doc),
            Region::Body => body_text(doc).into_iter().collect(),
        }
    }
}

/// Ranked phrases of one region, per phrase size.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SectionResult {
    #[serde(rename = "1-word")]
    pub one_word: Vec<DensityEntry>,
    #[serde(rename = "2-word")]
    pub two_word: Vec<DensityEntry>,
    #[serde(rename = "3-word")]
    pub three_word: Vec<DensityEntry>,
}

impl SectionResult {
    pub fn get(&self, size: NgramSize) -> &[DensityEntry] {
        match size {
            NgramSize::One => &self.one_word,
            NgramSize::Two => &self.two_word,
            NgramSize::Three => &self.three_word,
        }
    }

    fn get_mut(&mut self, size: NgramSize) -> &mut Vec<DensityEntry> {
        match size {
            NgramSize::One => &mut self.one_word,
            NgramSize::Two => &mut self.two_word,
            NgramSize::Three => &mut self.three_word,
        }
    }

    /// True when no size has any entry.
    pub fn is_empty(&self) -> bool {
        NgramSize::ALL.iter().all(|&size| self.get(size).is_empty())
    }
}

/// Complete analysis of one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DensityReport {
    /// URL or file path the page was read from, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub headings: SectionResult,
    pub links: SectionResult,
    pub images: SectionResult,
    pub body: SectionResult,
}

impl DensityReport {
    pub fn section(&self, region: Region) -> &SectionResult {
        match region {
            Region::Headings => &self.headings,
            Region::Links => &self.links,
            Region::Images => &self.images,
            Region::Body => &self.body,
        }
    }
}

/// Analyzes all four regions of a parsed document.
pub fn analyze_document(doc: &Document, max_entries: usize) -> DensityReport {
    let headings = analyze_items(&heading_texts(doc), max_entries);
    let links = analyze_items(&link_texts(doc), max_entries);
    let images = analyze_items(&image_alts(doc), max_entries);

    let body = match body_text(doc) {
        Some(text) => analyze_body(&text, max_entries),
        None => {
            warn!("document has no <body>, body section left empty");
            SectionResult::default()
        }
    };

    DensityReport { url: None, headings, links, images, body }
}

/// Analyzes an itemized region.
///
/// Each item is normalized separately so phrases never span two items.
/// Densities are relative to the number of items.
pub fn analyze_items(items: &[String], max_entries: usize) -> SectionResult {
    let normalized: Vec<String> = items.iter().map(|item| normalize(item)).collect();
    let total = items.len();
    let mut result = SectionResult::default();

    for size in NgramSize::ALL {
        let pool = normalized.iter().flat_map(|text| phrases(text, size.words()));
        *result.get_mut(size) = calculate_density(pool, total, max_entries);
    }

    result
}

/// Analyzes body text as one blob.
///
/// Densities are relative to the number of phrases of each size.
pub fn analyze_body(text: &str, max_entries: usize) -> SectionResult {
    let normalized = normalize(text);
    let words: Vec<String> = tokens(&normalized).into_iter().map(String::from).collect();
    let word_total = words.len();
    let mut result = SectionResult::default();

    result.one_word = calculate_density(words, word_total, max_entries);
    for size in [NgramSize::Two, NgramSize::Three] {
        let pool = phrases(&normalized, size.words());
        let total = pool.len();
        *result.get_mut(size) = calculate_density(pool, total, max_entries);
    }

    debug!(words = word_total, "analyzed body text");
    result
}

/// Text of every `h1`..`h6` element.
pub fn heading_texts(doc: &Document) -> Vec<String> {
    let items: Vec<String> = doc.find_all(&HEADING_TAGS).iter().map(|h| h.text()).collect();
    debug!(count = items.len(), "extracted headings");
    items
}

/// Trimmed text of every anchor that carries an `href` attribute.
pub fn link_texts(doc: &Document) -> Vec<String> {
    let items: Vec<String> = doc
        .find_all(&TagName("a"))
        .iter()
        .filter(|a| a.has_attr("href"))
        .map(|a| a.text().trim().to_string())
        .collect();
    debug!(count = items.len(), "extracted links");
    items
}

/// Trimmed, non-empty `alt` text of every image.
pub fn image_alts(doc: &Document) -> Vec<String> {
    let items: Vec<String> = doc
        .find_all(&TagName("img"))
        .iter()
        .filter_map(|img| img.attr("alt"))
        .map(str::trim)
        .filter(|alt| !alt.is_empty())
        .map(String::from)
        .collect();
    debug!(count = items.len(), "extracted image alt texts");
    items
}

/// Text content of the first `<body>` element.
pub fn body_text(doc: &Document) -> Option<String> {
    doc.body().map(|body| body.text())
}
