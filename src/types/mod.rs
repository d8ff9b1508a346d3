use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a document in its corpus, in insertion order starting at 0.
///
/// Stored as `usize` so every index of the document list has an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentId(pub usize);

impl DocumentId {
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn value(&self) -> usize {
        self.0
    }

    /// Index into the corpus document list
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Aggregate counts reported for an ingested document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Length of the normalized text in bytes
    pub normalized_len: usize,
    pub token_count: usize,
    pub distinct_tokens: usize,
    pub sentence_boundaries: usize,
}
