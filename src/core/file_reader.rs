//! Whole-file reading for Markdown documents
//!
//! Non-UTF-8 content is decoded lossily rather than skipped, so one badly
//! encoded note does not hide the links in the rest of it.

use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Read a file as text, replacing invalid UTF-8 sequences
pub fn read_document(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            warn!(path = %path.display(), "file is not valid UTF-8, decoding lossily");
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}
