use crate::document::Document;
use crate::similarity::pearson;
use crate::types::DocumentId;
use serde::Serialize;
use std::fmt;

/// Best later partner found for one document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pairing {
    pub id: DocumentId,
    pub left: DocumentId,
    /// `None` when no later document exists
    pub right: Option<DocumentId>,
    /// Score of `right`, or 0 when there is no partner
    pub score: f64,
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.right {
            Some(right) => write!(f, "{} -> {} ({:.6})", self.left, right, self.score),
            None => write!(f, "{} -> none", self.left),
        }
    }
}

/// Pair every document with its most similar later document.
///
/// For document `i` only `j > i` are examined, scored with
/// `pearson(d_i, d_j)`. A candidate replaces the current best only when
/// strictly better, so ties resolve to the lowest `j`. NaN scores never win.
#[must_use = "pairing results should be used or the computation is wasted"]
pub fn nearest_neighbors(documents: &[Document]) -> Vec<Pairing> {
    documents
        .iter()
        .enumerate()
        .map(|(i, doc)| {
            let id = DocumentId::from_index(i);
            let best = best_later_match(doc, &documents[i + 1..])
                .map(|(offset, score)| (DocumentId::from_index(i + 1 + offset), score));

            Pairing {
                id,
                left: id,
                right: best.map(|(right, _)| right),
                score: best.map_or(0.0, |(_, score)| score),
            }
        })
        .collect()
}

/// Index (relative to `candidates`) and score of the best candidate.
fn best_later_match(doc: &Document, candidates: &[Document]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;

    for (j, candidate) in candidates.iter().enumerate() {
        let score = pearson(doc.frequency(), candidate.frequency());
        let better = match best {
            Some((_, best_score)) => best_score < score,
            None => !score.is_nan(),
        };
        if better {
            best = Some((j, score));
        }
    }

    best
}
