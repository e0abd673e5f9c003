//! CLI module - Command-line interface definition and handler

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::core::render::{OutputFormat, RenderConfig};

/// mdlinks - check relative links and #anchors across Markdown notes.
#[derive(Parser, Debug)]
#[command(name = "mdlinks")]
#[command(
    author,
    version,
    about,
    long_about = r#"mdlinks validates the links inside a tree of Markdown documents.

Every relative link must point at an existing file (not a directory), and every
#fragment into a Markdown file must match a heading slug or an explicit
<a id="..."> / <a name="..."> anchor in that file. Links inside fenced code
blocks and HTML comments are ignored. External links (https:, mailto:, ...) are
never fetched. Absolute-path links are reported as warnings.

Exit codes:
- 0: no errors (warnings may be printed)
- 1: broken links or anchors found
- 2: usage error (bad path, not a .md file, no Markdown files, invalid arguments)

Examples:
    mdlinks notes/
    mdlinks notes/2024-01-15-meeting.md
    mdlinks docs --format json
"#
)]
pub struct Cli {
    /// Markdown file or directory to check.
    #[arg(
        value_name = "TARGET",
        long_help = "A single Markdown file (.md) or a directory.\n\n\
Directories are searched recursively for *.md files, checked in sorted order."
    )]
    pub target: PathBuf,

    /// Output format (text/json).
    #[arg(
        long,
        default_value = "text",
        value_parser = ["text", "json"],
        value_name = "FORMAT",
        long_help = "Select the report format.\n\n\
Supported values:\n\
- text (default): '[ERROR]' / '[WARN]' / '[OK]' headers with '- path:line' entries\n\
- json: a single object with ok, files_checked, errors and warnings"
    )]
    pub format: String,

    /// Pretty-print JSON output with indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. Colors are also disabled automatically when\n\
stdout is not a terminal."
    )]
    pub no_color: bool,

    /// Quiet mode (only log errors on stderr).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logs on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

/// Send diagnostics to stderr so stdout carries only the report
fn init_logging(level: &str) {
    let filter = EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<ExitCode> {
    init_logging(cli.log_level());

    if cli.no_color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    crate::lint::run_check(&cli.target, render_config)
}
