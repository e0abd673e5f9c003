//! Anchors module - Fragment identifiers defined by documents
//!
//! A document defines an anchor for every explicit `<a id/name>` tag and for
//! every heading (via its slug). Format: `[text](file.md#anchor)` links to one.

pub mod cache;
pub mod parse;
pub mod slug;
