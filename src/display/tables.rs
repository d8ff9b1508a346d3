//! Table formatting utilities for structured output.

use crate::corpus::Corpus;
use crate::similarity::Pairing;
use comfy_table::{Attribute, Cell, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL};

/// Builder for creating formatted tables.
pub struct TableBuilder {
    table: Table,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    pub fn new() -> Self {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.apply_modifier(UTF8_ROUND_CORNERS);
        Self { table }
    }

    /// Set the table headers.
    pub fn set_headers(mut self, headers: Vec<&str>) -> Self {
        let header_cells: Vec<Cell> = headers
            .into_iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
            .collect();
        self.table.set_header(header_cells);
        self
    }

    pub fn add_row(mut self, row: Vec<String>) -> Self {
        self.table.add_row(row);
        self
    }

    pub fn build(self) -> String {
        self.table.to_string()
    }
}

fn location_of(corpus: &Corpus, index: usize) -> String {
    corpus
        .documents()
        .get(index)
        .map(|doc| doc.location().to_string())
        .unwrap_or_default()
}

/// Per-document counts: normalized length, tokens, distinct tokens.
pub fn create_stats_table(corpus: &Corpus) -> String {
    corpus
        .documents()
        .iter()
        .enumerate()
        .fold(
            TableBuilder::new().set_headers(vec![
                "#",
                "Location",
                "Text length",
                "Tokens",
                "Distinct",
                "Periods",
            ]),
            |table, (i, doc)| {
                let stats = doc.stats();
                table.add_row(vec![
                    i.to_string(),
                    doc.location().to_string(),
                    stats.normalized_len.to_string(),
                    stats.token_count.to_string(),
                    stats.distinct_tokens.to_string(),
                    stats.sentence_boundaries.to_string(),
                ])
            },
        )
        .build()
}

/// Pearson score of each document against its successor.
pub fn create_comparison_table(corpus: &Corpus, scores: &[f64]) -> String {
    scores
        .iter()
        .enumerate()
        .fold(
            TableBuilder::new().set_headers(vec!["Left", "Right", "Pearson"]),
            |table, (i, score)| {
                table.add_row(vec![
                    location_of(corpus, i),
                    location_of(corpus, i + 1),
                    format!("{score:.6}"),
                ])
            },
        )
        .build()
}

/// Nearest-neighbour pairing per document.
pub fn create_pairing_table(corpus: &Corpus, pairings: &[Pairing]) -> String {
    pairings
        .iter()
        .fold(
            TableBuilder::new().set_headers(vec!["#", "Left", "Nearest", "Pearson"]),
            |table, pairing| {
                let (right, score) = match pairing.right {
                    Some(right) => (
                        location_of(corpus, right.index()),
                        format!("{:.6}", pairing.score),
                    ),
                    None => ("none".to_string(), "-".to_string()),
                };
                table.add_row(vec![
                    pairing.id.value().to_string(),
                    location_of(corpus, pairing.left.index()),
                    right,
                    score,
                ])
            },
        )
        .build()
}
