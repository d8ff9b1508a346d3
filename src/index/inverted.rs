use crate::types::DocumentId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// How often a document is recorded under a token it contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Multiplicity {
    /// One entry per token occurrence; a word used three times is listed
    /// three times. Consumers can read the list as count-weighted.
    #[default]
    PerOccurrence,
    /// At most one entry per document.
    PerDocument,
}

impl FromStr for Multiplicity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per_occurrence" => Ok(Self::PerOccurrence),
            "per_document" => Ok(Self::PerDocument),
            other => Err(format!(
                "unknown multiplicity '{other}', expected 'per_occurrence' or 'per_document'"
            )),
        }
    }
}

/// Exact-match inverted index.
///
/// Each token maps to an ordered posting list of document ids, appended in
/// ingestion order. No stemming, case folding or prefix matching is done
/// here; tokens arrive already normalized.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<DocumentId>>,
    multiplicity: Multiplicity,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_multiplicity(multiplicity: Multiplicity) -> Self {
        Self {
            postings: HashMap::new(),
            multiplicity,
        }
    }

    pub fn multiplicity(&self) -> Multiplicity {
        self.multiplicity
    }

    /// Append `id` under every token in `tokens`.
    ///
    /// With [`Multiplicity::PerOccurrence`] a repeated token appends once per
    /// repetition. All of a document's postings are written in one call, so
    /// the per-document check only has to look at the tail of each list.
    pub fn update(&mut self, id: DocumentId, tokens: &[String]) {
        for token in tokens {
            let list = self.postings.entry(token.clone()).or_default();
            match self.multiplicity {
                Multiplicity::PerOccurrence => list.push(id),
                Multiplicity::PerDocument => {
                    if list.last() != Some(&id) {
                        list.push(id);
                    }
                }
            }
        }
    }

    /// Posting list for `token`, empty when the token was never indexed.
    pub fn lookup(&self, token: &str) -> &[DocumentId] {
        self.postings
            .get(token)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.postings.contains_key(token)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Total number of postings across all tokens
    pub fn posting_count(&self) -> usize {
        self.postings.values().map(Vec::len).sum()
    }
}
