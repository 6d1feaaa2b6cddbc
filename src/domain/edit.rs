//! Document edit notifications and their classification

use serde::{Deserialize, Serialize};

/// One atomic range of a document change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextChange {
    /// Length of the inserted text
    pub inserted_len: usize,
    /// Length of the range the insertion replaced
    pub replaced_len: usize,
}

impl TextChange {
    pub fn insert(len: usize) -> Self {
        Self {
            inserted_len: len,
            replaced_len: 0,
        }
    }

    pub fn delete(len: usize) -> Self {
        Self {
            inserted_len: 0,
            replaced_len: len,
        }
    }

    pub fn replace(inserted_len: usize, replaced_len: usize) -> Self {
        Self {
            inserted_len,
            replaced_len,
        }
    }

    pub fn classify(&self) -> EditKind {
        classify(self)
    }
}

/// A change notification from the editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditEvent {
    pub document_id: String,
    /// Language/type identifier of the document (e.g. "markdown")
    pub type_id: String,
    pub changes: Vec<TextChange>,
}

impl EditEvent {
    pub fn new(
        document_id: impl Into<String>,
        type_id: impl Into<String>,
        changes: Vec<TextChange>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            type_id: type_id.into(),
            changes,
        }
    }

    /// Classify every range, in order
    pub fn classified(&self) -> impl Iterator<Item = EditKind> + '_ {
        self.changes.iter().map(classify)
    }
}

/// What a single change range means for the daily count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Net characters added
    Addition(u64),
    /// Characters removed
    Deletion(u64),
    /// Replacement that added nothing net; never credited or reversed
    Replacement,
    NoOp,
}

/// Classify a single change range.
///
/// A replacement that grows the text counts as an addition of the net
/// growth. One that shrinks or keeps the length is ignored entirely.
pub fn classify(change: &TextChange) -> EditKind {
    let inserted = change.inserted_len as u64;
    let replaced = change.replaced_len as u64;
    match (inserted, replaced) {
        (0, 0) => EditKind::NoOp,
        (n, 0) => EditKind::Addition(n),
        (0, m) => EditKind::Deletion(m),
        (n, m) if n > m => EditKind::Addition(n - m),
        _ => EditKind::Replacement,
    }
}

/// Synthesize an edit from a change in total document length
pub fn classify_length_delta(previous: usize, current: usize) -> EditKind {
    if current > previous {
        EditKind::Addition((current - previous) as u64)
    } else if current < previous {
        EditKind::Deletion((previous - current) as u64)
    } else {
        EditKind::NoOp
    }
}
