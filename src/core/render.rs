//! Renderer module
//!
//! Renders a validation Report as human-readable text or JSON

use colored::Colorize;

use crate::core::model::{Issue, Report};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for validation reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string (no trailing newline)
    pub fn render(&self, report: &Report) -> String {
        match self.config.format {
            OutputFormat::Text => self.render_text(report),
            OutputFormat::Json => self.render_json(report),
        }
    }

    fn render_text(&self, report: &Report) -> String {
        let mut lines = Vec::new();

        if report.has_errors() {
            lines.push(format!(
                "{} Link validation found problems.",
                "[ERROR]".red().bold()
            ));
            push_issues(&mut lines, &report.errors);
        } else {
            lines.push(format!(
                "{} Link validation passed ({} files)",
                "[OK]".green().bold(),
                report.files_checked
            ));
        }

        if !report.warnings.is_empty() {
            lines.push(format!("{} Additional notes", "[WARN]".yellow().bold()));
            push_issues(&mut lines, &report.warnings);
        }

        lines.join("\n")
    }

    fn render_json(&self, report: &Report) -> String {
        let result = if self.config.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        result.unwrap_or_else(|e| format!(r#"{{"error": "{}"}}"#, e))
    }
}

fn push_issues(lines: &mut Vec<String>, issues: &[Issue]) {
    for issue in issues {
        lines.push(format!("- {}", issue.format_human_readable()));
    }
}

/// One-line message for a run that never got to validation
pub fn render_usage_error(message: &str) -> String {
    format!("{} {}", "[ERROR]".red().bold(), message)
}
