//! Inline link scanning
//!
//! Finds `[label](destination)` links in masked text. Images (`![alt](src)`)
//! are skipped. The destination runs to the first `)`; nested parentheses are
//! not balanced.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::model::Link;

/// Static regex for inline links
/// Format: [label](destination)
pub static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\]]*\]\(([^)]+)\)").expect("Invalid LINK_RE regex"));

/// Lazy iterator over the links of one masked text
///
/// Cloning yields an independent scan from the current position.
#[derive(Debug, Clone)]
pub struct LinkScanner<'a> {
    text: &'a str,
    pos: usize,
    line: usize,
    counted_to: usize,
}

impl<'a> LinkScanner<'a> {
    pub fn new(masked: &'a str) -> Self {
        Self {
            text: masked,
            pos: 0,
            line: 1,
            counted_to: 0,
        }
    }

    fn line_at(&mut self, offset: usize) -> usize {
        self.line += self.text[self.counted_to..offset].matches('\n').count();
        self.counted_to = offset;
        self.line
    }
}

impl Iterator for LinkScanner<'_> {
    type Item = Link;

    fn next(&mut self) -> Option<Link> {
        while self.pos < self.text.len() {
            let caps = LINK_RE.captures_at(self.text, self.pos)?;
            let whole = caps.get(0)?;
            let start = whole.start();

            if start > 0 && self.text.as_bytes()[start - 1] == b'!' {
                // Image: retry just past its '[' so inner links are still seen
                self.pos = start + 1;
                continue;
            }

            self.pos = whole.end();
            let target = caps.get(1).map(|m| m.as_str().to_string())?;
            let line = self.line_at(start);
            return Some(Link { line, target });
        }

        None
    }
}

/// Scan the links of a masked text
pub fn scan_links(masked: &str) -> LinkScanner<'_> {
    LinkScanner::new(masked)
}
