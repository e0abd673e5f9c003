//! mdlinks - Validate links and anchors across a tree of Markdown documents
//!
//! mdlinks provides:
//! - Relative link resolution against the linking document's directory
//! - Fragment checks against heading slugs and explicit `<a id/name>` anchors
//! - Masking of fenced code blocks and HTML comments
//! - Text or JSON reports with file:line context

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

mod anchors;
mod cli;
mod core;
mod links;
mod lint;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
