//! HTML parsing and DOM traversal.
//!
//! This module provides the [`Document`] and [`Element`] types the section
//! analyzers read from. Elements are located with a [`TagPredicate`], which is
//! how "every heading level" is expressed without resorting to pattern
//! matching on tag names.
//!
//! # Example
//!
//! ```rust
//! use densito_core::parse::{Document, HEADING_TAGS};
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <h1>Title</h1>
//!             <h3>Subtitle</h3>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html).unwrap();
//! let headings = doc.find_all(&HEADING_TAGS);
//! assert_eq!(headings.len(), 2);
//! ```

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html};

use crate::Result;

static BODY_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<body[\s/>]").expect("BUG: invalid BODY_TAG_RE regex literal"));

/// Decides whether an element takes part in a traversal, by tag name.
pub trait TagPredicate {
    /// Returns true when an element named `tag_name` (lowercase) matches.
    fn matches(&self, tag_name: &str) -> bool;
}

/// Matches a single tag name, case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagName(pub &'static str);

impl TagPredicate for TagName {
    fn matches(&self, tag_name: &str) -> bool {
        self.0.eq_ignore_ascii_case(tag_name)
    }
}

/// Matches any tag name from a fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnyTag(pub &'static [&'static str]);

impl TagPredicate for AnyTag {
    fn matches(&self, tag_name: &str) -> bool {
        self.0.iter().any(|name| name.eq_ignore_ascii_case(tag_name))
    }
}

/// Heading levels 1 through 6.
pub const HEADING_TAGS: AnyTag = AnyTag(&["h1", "h2", "h3", "h4", "h5", "h6"]);

/// Represents a parsed HTML document.
///
/// # Example
///
/// ```rust
/// use densito_core::parse::Document;
///
/// let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
/// let doc = Document::parse(html).unwrap();
/// assert_eq!(doc.title(), Some("Test".to_string()));
/// ```
pub struct Document {
    html: Html,
    has_body_tag: bool,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// The parser is error tolerant: malformed markup is repaired the way a
    /// browser would repair it. It also synthesizes a `<body>` for every
    /// document, so whether the source actually had one is recorded here.
    pub fn parse(html: &str) -> Result<Self> {
        let has_body_tag = BODY_TAG_RE.is_match(html);
        let html = Html::parse_document(html);
        Ok(Self { html, has_body_tag })
    }

    /// Finds every element whose tag name satisfies `predicate`, in document order.
    pub fn find_all(&'_ self, predicate: &impl TagPredicate) -> Vec<Element<'_>> {
        self.elements().filter(|el| predicate.matches(el.value().name())).map(|el| Element { element: el }).collect()
    }

    /// Finds the first element with the given tag name.
    pub fn find_first(&'_ self, tag_name: &'static str) -> Option<Element<'_>> {
        let predicate = TagName(tag_name);
        self.elements().find(|el| predicate.matches(el.value().name())).map(|el| Element { element: el })
    }

    /// Gets the `<body>` element.
    ///
    /// Returns `None` when the source markup had no `<body>` tag, even though
    /// the parsed tree always contains one.
    pub fn body(&'_ self) -> Option<Element<'_>> {
        if !self.has_body_tag {
            return None;
        }
        self.find_first("body")
    }

    /// Gets the title of the document.
    pub fn title(&self) -> Option<String> {
        self.find_first("title").map(|el| el.text())
    }

    fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.root_element().descendants().filter_map(ElementRef::wrap)
    }
}

/// A wrapper around scraper's ElementRef.
///
/// # Example
///
/// ```rust
/// use densito_core::parse::{Document, TagName};
///
/// let html = r#"<a href="https://example.com">Link text</a>"#;
/// let doc = Document::parse(html).unwrap();
/// let link = &doc.find_all(&TagName("a"))[0];
///
/// assert_eq!(link.text(), "Link text");
/// assert_eq!(link.attr("href"), Some("https://example.com"));
/// ```
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the text content of this element.
    ///
    /// Returns the concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute, or `None` if it is not present.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Whether the attribute is present, regardless of its value.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <meta charset="UTF-8">
            <title>Test Page</title>
        </head>
        <body>
            <h1>Heading</h1>
            <p class="content">Paragraph 1</p>
            <h4>Minor heading</h4>
            <p class="content">Paragraph 2</p>
            <a href="https://example.com">Link</a>
            <a name="anchor">Not a link</a>
            <H2>Shouting</H2>
        </body>
        </html>
    "#;

    #[test]
    fn test_parse_document() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        assert_eq!(doc.title(), Some("Test Page".to_string()));
    }

    #[test]
    fn test_find_all_headings_in_document_order() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let headings: Vec<String> = doc.find_all(&HEADING_TAGS).iter().map(|h| h.text()).collect();

        assert_eq!(headings, vec!["Heading", "Minor heading", "Shouting"]);
    }

    #[test]
    fn test_heading_predicate() {
        assert!(HEADING_TAGS.matches("h1"));
        assert!(HEADING_TAGS.matches("h6"));
        assert!(HEADING_TAGS.matches("H3"));
        assert!(!HEADING_TAGS.matches("h7"));
        assert!(!HEADING_TAGS.matches("header"));
        assert!(!HEADING_TAGS.matches("hr"));
    }

    #[test]
    fn test_element_attributes() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let anchors = doc.find_all(&TagName("a"));

        assert_eq!(anchors.len(), 2);
        assert_eq!(anchors[0].attr("href"), Some("https://example.com"));
        assert!(anchors[0].has_attr("href"));
        assert!(!anchors[1].has_attr("href"));
    }

    #[test]
    fn test_find_first_body() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let body = doc.body().unwrap();

        assert!(body.text().contains("Paragraph 2"));
        assert!(!body.text().contains("Test Page"));
    }

    #[rstest]
    #[case("<title>T</title><h1>Hello there</h1>")]
    #[case("<html><head></head><p>no body tag</p></html>")]
    #[case("<bodyguard>not a body</bodyguard>")]
    fn test_body_absent_without_body_tag(#[case] html: &str) {
        let doc = Document::parse(html).unwrap();
        assert!(doc.body().is_none());
    }

    #[rstest]
    #[case("<body>text</body>")]
    #[case("<BODY class=\"main\">text</BODY>")]
    #[case("<body\n>text")]
    fn test_body_present_with_body_tag(#[case] html: &str) {
        let doc = Document::parse(html).unwrap();
        assert!(doc.body().is_some());
    }
}
