//! Path utilities
//!
//! Link targets are resolved against the directory of the linking document and
//! normalized lexically before they touch the filesystem.

use std::path::{Component, Path, PathBuf};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Collapse `.` and `..` components without consulting the filesystem
pub fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(out.components().next_back(), Some(Component::Normal(_)))
                    && out.pop();
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }

    out
}

/// Resolve a link's path part relative to the document that contains it
pub fn resolve_relative(source: &Path, link_path: &str) -> PathBuf {
    let base = source.parent().unwrap_or_else(|| Path::new(""));
    lexical_normalize(&base.join(link_path))
}

/// Stable identity for a file: canonical when it exists, lexical otherwise
pub fn cache_key(path: &Path) -> PathBuf {
    path.canonicalize()
        .unwrap_or_else(|_| lexical_normalize(path))
}

/// Check for a `.md` extension, ignoring case
pub fn has_markdown_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}
