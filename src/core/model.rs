//! Validation result model
//!
//! Every problem found during a run maps to an [`Issue`]; a run produces one
//! [`Report`] that the renderer turns into text or JSON.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

use crate::core::file_reader::read_document;
use crate::core::mask::mask_ignored_regions;
use crate::core::paths::normalize_path;

/// A Markdown document loaded for validation
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,

    /// Raw file content
    pub text: String,

    /// `text` with comments and fenced blocks blanked out
    pub masked: String,
}

impl Document {
    /// Read and mask a document from disk
    pub fn load(path: &Path) -> io::Result<Self> {
        let text = read_document(path)?;
        Ok(Self::from_text(path, text))
    }

    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let text = text.into();
        let masked = mask_ignored_regions(&text);
        Self {
            path: path.into(),
            text,
            masked,
        }
    }
}

/// A link found in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// 1-indexed line of the opening `[`
    pub line: usize,

    /// Destination text between the parentheses, as written
    pub target: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// The kind of problem found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    MissingFile,
    DirectoryTarget,
    MissingAnchor,
    ReadFailure,
    AbsolutePath,
}

impl IssueKind {
    pub fn severity(self) -> Severity {
        match self {
            IssueKind::AbsolutePath => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            IssueKind::MissingFile => "link target does not exist",
            IssueKind::DirectoryTarget => "link target is a directory",
            IssueKind::MissingAnchor => "anchor not found",
            IssueKind::ReadFailure => "failed to read file",
            IssueKind::AbsolutePath => "absolute path link",
        }
    }
}

/// A single error or warning with file:line context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub severity: Severity,

    /// Source document, using '/' as separator
    pub file: String,

    /// 1-indexed line; 0 when the issue concerns the whole file
    pub line: usize,

    /// Normalized link target, or the I/O error for read failures
    pub target: String,

    pub message: String,
}

impl Issue {
    pub fn new(kind: IssueKind, file: &Path, line: usize, target: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            file: normalize_path(file),
            line,
            target: target.into(),
            message: kind.message().to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// `<path>:<line> <message>: <target>`
    pub fn format_human_readable(&self) -> String {
        format!(
            "{}:{} {}: {}",
            self.file, self.line, self.message, self.target
        )
    }
}

/// Aggregated outcome of one validation run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    pub ok: bool,
    pub files_checked: usize,
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
}

impl Report {
    pub fn new(files_checked: usize) -> Self {
        Self {
            ok: true,
            files_checked,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Route an issue to errors or warnings, keeping encounter order
    pub fn push(&mut self, issue: Issue) {
        if issue.is_error() {
            self.ok = false;
            self.errors.push(issue);
        } else {
            self.warnings.push(issue);
        }
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = Issue>) {
        for issue in issues {
            self.push(issue);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_format() {
        let issue = Issue::new(
            IssueKind::MissingFile,
            Path::new("notes/a.md"),
            3,
            "missing.md",
        );
        assert_eq!(
            issue.format_human_readable(),
            "notes/a.md:3 link target does not exist: missing.md"
        );
        assert!(issue.is_error());
    }

    #[test]
    fn test_report_routes_by_severity() {
        let mut report = Report::new(1);
        report.push(Issue::new(
            IssueKind::AbsolutePath,
            Path::new("a.md"),
            1,
            "/etc/config",
        ));
        assert!(report.ok);
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 1);

        report.push(Issue::new(
            IssueKind::MissingAnchor,
            Path::new("a.md"),
            2,
            "b.md#nope",
        ));
        assert!(!report.ok);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_issue_serialization() {
        let issue = Issue::new(
            IssueKind::DirectoryTarget,
            Path::new("a.md"),
            7,
            "sub",
        );
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["kind"], "directory-target");
        assert_eq!(json["severity"], "error");
        assert_eq!(json["line"], 7);
    }

    #[test]
    fn test_document_from_text_masks() {
        let doc = Document::from_text("a.md", "<!-- [x](y.md) -->\n[z](z.md)\n");
        assert!(!doc.masked.contains("y.md"));
        assert!(doc.masked.contains("z.md"));
        assert_eq!(doc.text.lines().count(), doc.masked.lines().count());
    }
}
