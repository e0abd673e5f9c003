//! Region masking
//!
//! Blanks out HTML comments and fenced code blocks so that links and anchors
//! written inside them are never matched. Every masked character becomes a
//! single space and newlines are kept, so line numbers computed on the masked
//! text are the line numbers of the raw text.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `<!-- ... -->` or ```` ``` ... ``` ````, each running to end of text when
/// unterminated. Leftmost region wins, so delimiters inside an open region
/// never open another one.
static IGNORED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<!--.*?(?:-->|\z)|```.*?(?:```|\z)").expect("Invalid IGNORED_RE regex")
});

/// Mask comments and fenced blocks in a single left-to-right pass.
pub fn mask_ignored_regions(text: &str) -> String {
    IGNORED_RE.replace_all(text, blank).into_owned()
}

fn blank(caps: &Captures) -> String {
    caps[0]
        .chars()
        .map(|c| if c == '\n' { '\n' } else { ' ' })
        .collect()
}
