//! Usage errors
//!
//! These terminate a run before any document is validated. Problems found in
//! documents are reported as [`Issue`](crate::core::model::Issue) values instead.

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for a run that found link or anchor errors
pub const EXIT_LINK_ERRORS: u8 = 1;

/// Exit code for a usage error
pub const EXIT_USAGE: u8 = 2;

/// Invalid input target
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("expected a Markdown file (.md): {}", .0.display())]
    NotMarkdown(PathBuf),

    #[error("path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("expected a directory or a Markdown file: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("no Markdown files found: {}", .0.display())]
    NoMarkdownFiles(PathBuf),
}
