//! Per-document length baselines
//!
//! The primary edit path refreshes a document's baseline on every observed
//! change, tracked or not. At checkpoints (focus changes, saves) the host
//! can report the full length instead, and the difference from the baseline
//! is turned into a synthetic addition or deletion.

use std::collections::HashMap;

use crate::domain::{classify_length_delta, EditKind};

/// Last seen full length of each document
#[derive(Debug, Clone, Default)]
pub struct Baselines {
    lengths: HashMap<String, usize>,
}

impl Baselines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current length, returning the previous baseline
    pub fn observe(&mut self, document_id: &str, len: usize) -> Option<usize> {
        self.lengths.insert(document_id.to_string(), len)
    }

    pub fn get(&self, document_id: &str) -> Option<usize> {
        self.lengths.get(document_id).copied()
    }

    /// Compare `len` against the baseline and move the baseline to it.
    ///
    /// Returns `None` the first time a document is seen so opening a file
    /// never credits its existing contents.
    pub fn reconcile(&mut self, document_id: &str, len: usize) -> Option<EditKind> {
        let previous = self.observe(document_id, len)?;
        match classify_length_delta(previous, len) {
            EditKind::NoOp => None,
            kind => Some(kind),
        }
    }

    pub fn forget(&mut self, document_id: &str) {
        self.lengths.remove(document_id);
    }

    pub fn clear(&mut self) {
        self.lengths.clear();
    }
}
