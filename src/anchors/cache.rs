//! Per-run anchor cache
//!
//! Anchor sets are computed on first request and kept for the rest of the run.
//! Each path gets its own once-cell, so concurrent lookups of the same file wait
//! for a single extraction and all observe its result.

use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

use crate::anchors::parse::{extract_anchors, AnchorSet};
use crate::core::model::Document;
use crate::core::paths::cache_key;

type Slot = Arc<OnceCell<Arc<AnchorSet>>>;

#[derive(Debug, Default)]
pub struct AnchorCache {
    slots: Mutex<HashMap<PathBuf, Slot>>,
    extractions: AtomicUsize,
}

impl AnchorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchors of the file at `path`, extracting them on first use
    pub fn anchors(&self, path: &Path) -> Arc<AnchorSet> {
        let key = cache_key(path);

        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(slots.entry(key.clone()).or_default())
        };

        // Lock released: extraction of other files proceeds in parallel
        Arc::clone(slot.get_or_init(|| Arc::new(self.extract(&key))))
    }

    /// Number of files whose anchors have been extracted
    pub fn extractions(&self) -> usize {
        self.extractions.load(Ordering::Relaxed)
    }

    fn extract(&self, path: &Path) -> AnchorSet {
        self.extractions.fetch_add(1, Ordering::Relaxed);

        match Document::load(path) {
            Ok(doc) => {
                let anchors = extract_anchors(&doc);
                debug!(path = %path.display(), count = anchors.len(), "extracted anchors");
                anchors
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "cannot read link target for anchors");
                AnchorSet::new()
            }
        }
    }
}
