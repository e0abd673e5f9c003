//! Anchor extraction
//!
//! Collects the fragment identifiers a document defines:
//! <a id="xxx"></a> / <a name="xxx">   explicit anchors, value kept verbatim
//! ## Heading text                      slug of the heading text

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::anchors::slug::heading_to_anchor;
use crate::core::model::Document;

/// Set of anchors defined by one document
pub type AnchorSet = HashSet<String>;

/// Static regex for explicit anchor tags
/// Format: <a ... id="xxx" ...> or <a ... name='xxx' ...>
pub static HTML_ANCHOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<a\s+[^>]*(?:id|name)\s*=\s*['"]([^'"]+)['"][^>]*>"#)
        .expect("Invalid HTML_ANCHOR_RE regex")
});

/// Static regex for ATX headings
/// Format: 1-6 '#', whitespace, heading text
pub static HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(#{1,6})\s+(.+?)\s*$").expect("Invalid HEADING_RE regex")
});

/// Extract all anchors from a document's masked text
pub fn extract_anchors(doc: &Document) -> AnchorSet {
    parse_content(&doc.masked)
}

/// Extract anchors from already-masked content
pub fn parse_content(masked: &str) -> AnchorSet {
    let mut anchors = AnchorSet::new();

    for caps in HTML_ANCHOR_RE.captures_iter(masked) {
        anchors.insert(caps[1].to_string());
    }

    for caps in HEADING_RE.captures_iter(masked) {
        let anchor = heading_to_anchor(&caps[2]);
        if !anchor.is_empty() {
            anchors.insert(anchor);
        }
    }

    anchors
}
