//! Link target classification
//!
//! Normalizes the raw destination of a link and decides how it is checked:
//! - empty or `scheme:` targets are ignored
//! - `/absolute` targets are reported as warnings only
//! - everything else is a relative path with an optional `#fragment`

use once_cell::sync::Lazy;
use percent_encoding::percent_decode_str;
use regex::Regex;

/// Static regex for a URI scheme prefix (`https:`, `mailto:`, `x-foo+bar:`)
pub static SCHEME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*:").expect("Invalid SCHEME_RE regex")
});

/// Why a target needs no checking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    Empty,
    External,
}

/// A relative target split on its first '#'
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeTarget {
    /// The whole normalized target, used in reports
    pub target: String,

    /// Empty when the link points into its own document
    pub path: String,

    /// `None` for no fragment or an empty one (`file.md#`)
    pub fragment: Option<String>,
}

impl RelativeTarget {
    pub fn is_same_document(&self) -> bool {
        self.path.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Ignore(IgnoreReason),
    Absolute(String),
    Relative(RelativeTarget),
}

/// Strip a title annotation and angle brackets, then percent-decode
pub fn normalize_target(raw: &str) -> String {
    let mut target = raw.trim();
    if target.is_empty() {
        return String::new();
    }

    // [text](path "title"): keep the path unless the whole thing is <wrapped>
    if !target.starts_with('<') {
        if let Some((path, _title)) = target.split_once(' ') {
            target = path;
        }
    }

    if target.len() >= 2 && target.starts_with('<') && target.ends_with('>') {
        target = &target[1..target.len() - 1];
    }

    percent_decode_str(target).decode_utf8_lossy().into_owned()
}

pub fn is_external(target: &str) -> bool {
    SCHEME_RE.is_match(target)
}

/// Classify a raw link destination
pub fn resolve_target(raw: &str) -> Resolution {
    let target = normalize_target(raw);

    if target.is_empty() {
        return Resolution::Ignore(IgnoreReason::Empty);
    }
    if is_external(&target) {
        return Resolution::Ignore(IgnoreReason::External);
    }
    if target.starts_with('/') {
        return Resolution::Absolute(target);
    }

    let (path, fragment) = match target.split_once('#') {
        Some((path, fragment)) => (path.to_string(), fragment.to_string()),
        None => (target.clone(), String::new()),
    };

    Resolution::Relative(RelativeTarget {
        target,
        path,
        fragment: Some(fragment).filter(|f| !f.is_empty()),
    })
}
