//! Input enumeration
//!
//! Turns the CLI target into the sorted list of documents to validate.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::core::error::UsageError;
use crate::core::paths::has_markdown_extension;

/// A single `.md` file, or every `*.md` file under a directory
pub fn collect_markdown_files(target: &Path) -> Result<Vec<PathBuf>, UsageError> {
    let root = target
        .canonicalize()
        .map_err(|_| UsageError::NotFound(target.to_path_buf()))?;
    let metadata = fs::metadata(&root).map_err(|_| UsageError::NotFound(target.to_path_buf()))?;

    if metadata.is_file() {
        if !has_markdown_extension(&root) {
            return Err(UsageError::NotMarkdown(target.to_path_buf()));
        }
        return Ok(vec![root]);
    }

    if !metadata.is_dir() {
        return Err(UsageError::NotADirectory(target.to_path_buf()));
    }

    let files = scan_markdown_files(&root);
    if files.is_empty() {
        return Err(UsageError::NoMarkdownFiles(root));
    }

    debug!(root = %root.display(), count = files.len(), "collected Markdown files");
    Ok(files)
}

/// Recursively find regular files named `*.md`, sorted component-wise
fn scan_markdown_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                warn!(error = %err, "skipping unreadable directory entry");
                continue;
            }
        };

        let path = entry.path();
        let is_md = entry.file_name().to_string_lossy().ends_with(".md");
        if is_md && path.is_file() {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    files
}
