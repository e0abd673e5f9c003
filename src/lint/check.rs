//! Link validation
//!
//! Checks every link of every document:
//! - relative targets must exist and must not be directories
//! - `#fragment`s into Markdown files must name an anchor of the target
//! - absolute targets are reported as warnings

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::anchors::cache::AnchorCache;
use crate::core::model::{Document, Issue, IssueKind, Link, Report};
use crate::core::paths::{has_markdown_extension, resolve_relative};
use crate::links::scan::scan_links;
use crate::links::target::{resolve_target, RelativeTarget, Resolution};

/// Validates documents against a shared per-run anchor cache
pub struct Validator<'c> {
    cache: &'c AnchorCache,
}

impl<'c> Validator<'c> {
    pub fn new(cache: &'c AnchorCache) -> Self {
        Self { cache }
    }

    /// Load a document and check it; an unreadable file is itself an error
    pub fn check_file(&self, path: &Path) -> Vec<Issue> {
        match Document::load(path) {
            Ok(doc) => self.check_document(&doc),
            Err(err) => vec![Issue::new(IssueKind::ReadFailure, path, 0, err.to_string())],
        }
    }

    /// All issues of one document, in line order
    pub fn check_document(&self, doc: &Document) -> Vec<Issue> {
        let mut issues = Vec::new();
        let mut links = 0usize;

        for link in scan_links(&doc.masked) {
            links += 1;
            if let Some(issue) = self.check_link(doc, &link) {
                issues.push(issue);
            }
        }

        debug!(
            path = %doc.path.display(),
            bytes = doc.text.len(),
            links,
            issues = issues.len(),
            "checked document"
        );
        issues
    }

    pub fn check_link(&self, doc: &Document, link: &Link) -> Option<Issue> {
        match resolve_target(&link.target) {
            Resolution::Ignore(reason) => {
                trace!(line = link.line, ?reason, target = %link.target, "skipping link");
                None
            }
            Resolution::Absolute(target) => Some(Issue::new(
                IssueKind::AbsolutePath,
                &doc.path,
                link.line,
                target,
            )),
            Resolution::Relative(rel) => self
                .check_relative(&doc.path, &rel)
                .map(|kind| Issue::new(kind, &doc.path, link.line, rel.target)),
        }
    }

    fn check_relative(&self, source: &Path, rel: &RelativeTarget) -> Option<IssueKind> {
        let target_file: PathBuf = if rel.is_same_document() {
            source.to_path_buf()
        } else {
            resolve_relative(source, &rel.path)
        };

        let metadata = match fs::metadata(&target_file) {
            Ok(m) => m,
            Err(_) => return Some(IssueKind::MissingFile),
        };
        if metadata.is_dir() {
            return Some(IssueKind::DirectoryTarget);
        }

        let fragment = rel.fragment.as_deref()?;
        if has_markdown_extension(&target_file) && !self.cache.anchors(&target_file).contains(fragment)
        {
            return Some(IssueKind::MissingAnchor);
        }

        None
    }
}

/// Validate files in order and aggregate their issues into one report
pub fn validate_files(files: &[PathBuf], cache: &AnchorCache) -> Report {
    let validator = Validator::new(cache);

    #[cfg(feature = "parallel")]
    let per_file: Vec<Vec<Issue>> = files
        .par_iter()
        .map(|path| validator.check_file(path))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let per_file: Vec<Vec<Issue>> = files
        .iter()
        .map(|path| validator.check_file(path))
        .collect();

    let mut report = Report::new(files.len());
    for issues in per_file {
        report.extend(issues);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Severity;
    use tempfile::{tempdir, TempDir};

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    fn check(temp: &TempDir, name: &str) -> (Vec<Issue>, AnchorCache) {
        let cache = AnchorCache::new();
        let issues = Validator::new(&cache).check_file(&temp.path().join(name));
        (issues, cache)
    }

    fn kinds(issues: &[Issue]) -> Vec<IssueKind> {
        issues.iter().map(|i| i.kind).collect()
    }

    #[test]
    fn test_same_document_japanese_anchor() {
        let temp = tempdir().unwrap();
        write(temp.path(), "a.md", "## 設計メモ\n\n[x](a.md#設計メモ)\n[y](#設計メモ)\n");

        let (issues, _) = check(&temp, "a.md");
        assert!(issues.is_empty(), "{issues:?}");
    }

    #[test]
    fn test_percent_encoded_fragment_matches() {
        let temp = tempdir().unwrap();
        write(temp.path(), "a.md", "## 設計\n[x](#%E8%A8%AD%E8%A8%88)\n");

        let (issues, _) = check(&temp, "a.md");
        assert!(issues.is_empty(), "{issues:?}");
    }

    #[test]
    fn test_missing_file() {
        let temp = tempdir().unwrap();
        write(temp.path(), "a.md", "# A\n\n[y](missing.md)\n");

        let (issues, _) = check(&temp, "a.md");
        assert_eq!(kinds(&issues), vec![IssueKind::MissingFile]);
        assert_eq!(issues[0].line, 3);
        assert_eq!(issues[0].target, "missing.md");
    }

    #[test]
    fn test_absolute_path_is_warning() {
        let temp = tempdir().unwrap();
        write(temp.path(), "a.md", "[z](/etc/config)\n");

        let (issues, _) = check(&temp, "a.md");
        assert_eq!(kinds(&issues), vec![IssueKind::AbsolutePath]);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].target, "/etc/config");
    }

    #[test]
    fn test_missing_anchor() {
        let temp = tempdir().unwrap();
        write(temp.path(), "a.md", "[w](b.md#nope)\n[ok](b.md#intro)\n");
        write(temp.path(), "b.md", "# Intro\n");

        let (issues, _) = check(&temp, "a.md");
        assert_eq!(kinds(&issues), vec![IssueKind::MissingAnchor]);
        assert_eq!(issues[0].target, "b.md#nope");
    }

    #[test]
    fn test_explicit_anchor_satisfies_fragment() {
        let temp = tempdir().unwrap();
        write(temp.path(), "a.md", "[w](b.md#Decision-1)\n");
        write(temp.path(), "b.md", "<a id=\"Decision-1\"></a>\n");

        let (issues, _) = check(&temp, "a.md");
        assert!(issues.is_empty(), "{issues:?}");
    }

    #[test]
    fn test_fragment_is_case_sensitive() {
        let temp = tempdir().unwrap();
        write(temp.path(), "a.md", "[w](b.md#Intro)\n");
        write(temp.path(), "b.md", "# Intro\n");

        let (issues, _) = check(&temp, "a.md");
        assert_eq!(kinds(&issues), vec![IssueKind::MissingAnchor]);
    }

    #[test]
    fn test_directory_target() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("sub")).unwrap();
        write(temp.path(), "a.md", "[d](sub)\n[e](sub/#x)\n");

        let (issues, _) = check(&temp, "a.md");
        assert_eq!(
            kinds(&issues),
            vec![IssueKind::DirectoryTarget, IssueKind::DirectoryTarget]
        );
    }

    #[test]
    fn test_fragment_into_non_markdown_not_checked() {
        let temp = tempdir().unwrap();
        write(temp.path(), "a.md", "[c](code.rs#L10)\n");
        write(temp.path(), "code.rs", "fn main() {}\n");

        let (issues, cache) = check(&temp, "a.md");
        assert!(issues.is_empty());
        assert_eq!(cache.extractions(), 0);
    }

    #[test]
    fn test_links_resolve_from_source_directory() {
        let temp = tempdir().unwrap();
        write(temp.path(), "notes/sub/a.md", "[up](../index.md#top)\n[again](../nope/../index.md)\n");
        write(temp.path(), "notes/index.md", "# Top\n");

        let (issues, _) = check(&temp, "notes/sub/a.md");
        assert!(issues.is_empty(), "{issues:?}");
    }

    #[test]
    fn test_external_and_fenced_links_ignored() {
        let temp = tempdir().unwrap();
        write(
            temp.path(),
            "a.md",
            "[web](https://example.com)\n[mail](mailto:a@b.com)\n```\n[ignored](missing.md)\n```\n",
        );

        let (issues, cache) = check(&temp, "a.md");
        assert!(issues.is_empty());
        assert_eq!(cache.extractions(), 0);
    }

    #[test]
    fn test_links_without_fragments_never_extract() {
        let temp = tempdir().unwrap();
        write(temp.path(), "a.md", "[b](b.md)\n[b again](./b.md)\n");
        write(temp.path(), "b.md", "# B\n");

        let (issues, cache) = check(&temp, "a.md");
        assert!(issues.is_empty());
        assert_eq!(cache.extractions(), 0);
    }

    #[test]
    fn test_anchor_sets_are_memoized_across_documents() {
        let temp = tempdir().unwrap();
        let a = write(temp.path(), "a.md", "[x](c.md#one)\n");
        let b = write(temp.path(), "b.md", "[y](./c.md#two)\n");
        write(temp.path(), "c.md", "# One\n# Two\n");

        let cache = AnchorCache::new();
        let report = validate_files(&[a, b], &cache);
        assert!(report.ok);
        assert_eq!(cache.extractions(), 1);
    }

    #[test]
    fn test_report_order_and_verdict() {
        let temp = tempdir().unwrap();
        let a = write(temp.path(), "a.md", "[1](x.md)\n[w](/abs)\n[2](y.md)\n");
        let b = write(temp.path(), "b.md", "[3](z.md)\n");

        let cache = AnchorCache::new();
        let report = validate_files(&[a, b], &cache);

        assert!(!report.ok);
        assert_eq!(report.files_checked, 2);
        let targets: Vec<&str> = report.errors.iter().map(|i| i.target.as_str()).collect();
        assert_eq!(targets, vec!["x.md", "y.md", "z.md"]);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_unreadable_source_reported() {
        let temp = tempdir().unwrap();
        let cache = AnchorCache::new();
        let report = validate_files(&[temp.path().join("vanished.md")], &cache);

        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].kind, IssueKind::ReadFailure);
        assert_eq!(report.errors[0].line, 0);
    }
}
