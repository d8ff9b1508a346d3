//! The document model: one fetched text and everything derived from it.

use crate::text::{normalize, segment, sentence_slices, tokenize};
use crate::types::DocumentStats;
use std::collections::HashMap;

/// Token → occurrence count for one document.
///
/// Every present key has a count of at least 1. Iteration order is
/// unspecified and only ever used for order-independent sums.
pub type FrequencyMap = HashMap<String, usize>;

/// A fully processed document.
///
/// Built in one pass by [`Document::new`] (normalize, segment, tokenize,
/// count) and immutable afterwards, so no partially built document can be
/// observed.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    location: String,
    raw_text: String,
    normalized_text: String,
    sentence_boundaries: Vec<usize>,
    tokens: Vec<String>,
    frequency: FrequencyMap,
}

impl Document {
    pub fn new(location: impl Into<String>, raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        let normalized_text = normalize(&raw_text);
        let sentence_boundaries = segment(&raw_text);
        let tokens = tokenize(&normalized_text);
        let frequency = count_tokens(&tokens);

        Self {
            location: location.into(),
            raw_text,
            normalized_text,
            sentence_boundaries,
            tokens,
            frequency,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn normalized_text(&self) -> &str {
        &self.normalized_text
    }

    /// Byte offsets of every period in the raw text
    pub fn sentence_boundaries(&self) -> &[usize] {
        &self.sentence_boundaries
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn frequency(&self) -> &FrequencyMap {
        &self.frequency
    }

    /// Raw-text slices between adjacent sentence boundaries.
    pub fn sentences(&self) -> impl Iterator<Item = &str> + '_ {
        sentence_slices(&self.raw_text, &self.sentence_boundaries)
    }

    pub fn stats(&self) -> DocumentStats {
        DocumentStats {
            normalized_len: self.normalized_text.len(),
            token_count: self.tokens.len(),
            distinct_tokens: self.frequency.len(),
            sentence_boundaries: self.sentence_boundaries.len(),
        }
    }
}

fn count_tokens(tokens: &[String]) -> FrequencyMap {
    let mut frequency = FrequencyMap::with_capacity(tokens.len());
    for token in tokens {
        *frequency.entry(token.clone()).or_insert(0) += 1;
    }
    frequency
}
