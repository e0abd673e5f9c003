//! Lint module - Validate links and anchors across Markdown documents
//!
//! Checks for:
//! - links to files that do not exist
//! - links to directories
//! - `#fragment`s that name no heading or explicit anchor
//! - absolute-path links (warning only)

pub mod check;
pub mod inputs;

use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

use crate::anchors::cache::AnchorCache;
use crate::core::error::{EXIT_LINK_ERRORS, EXIT_USAGE};
use crate::core::render::{render_usage_error, RenderConfig, Renderer};
use crate::lint::check::validate_files;
use crate::lint::inputs::collect_markdown_files;

/// Run the link check over a file or directory and print the report
pub fn run_check(target: &Path, config: RenderConfig) -> Result<ExitCode> {
    let files = match collect_markdown_files(target) {
        Ok(files) => files,
        Err(err) => {
            println!("{}", render_usage_error(&err.to_string()));
            return Ok(ExitCode::from(EXIT_USAGE));
        }
    };

    let cache = AnchorCache::new();
    let report = validate_files(&files, &cache);
    debug!(
        files = report.files_checked,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        anchor_extractions = cache.extractions(),
        "validation finished"
    );

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(&report));

    if report.has_errors() {
        Ok(ExitCode::from(EXIT_LINK_ERRORS))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
