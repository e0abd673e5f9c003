//! Heading slugs
//!
//! Derives the fragment identifier a renderer assigns to a heading. Word
//! characters from any script survive, and so do kana and CJK ideographs.

use once_cell::sync::Lazy;
use regex::Regex;

static INLINE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`]*)`").expect("Invalid INLINE_CODE_RE regex"));

static LINK_SPAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("Invalid LINK_SPAN_RE regex"));

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("Invalid TAG_RE regex"));

/// Anything that is not a word character, whitespace, hyphen, kana or CJK
static DISALLOWED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\w\x{3040}-\x{30FF}\x{3400}-\x{9FFF}\s-]")
        .expect("Invalid DISALLOWED_RE regex")
});

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid WHITESPACE_RE regex"));

/// Convert heading text to its anchor slug. May return an empty string.
pub fn heading_to_anchor(heading: &str) -> String {
    let text = heading.trim().to_lowercase();
    let text = INLINE_CODE_RE.replace_all(&text, "${1}");
    let text = LINK_SPAN_RE.replace_all(&text, "${1}");
    let text = TAG_RE.replace_all(&text, "");
    let text = DISALLOWED_RE.replace_all(&text, "");
    let text = WHITESPACE_RE.replace_all(&text, "-");
    text.trim_matches('-').to_string()
}
