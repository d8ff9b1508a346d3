//! Frequency-based similarity between documents.
//!
//! # Metric
//! Similarity is a Pearson correlation over token frequency maps, with the
//! sample size taken from the *first* map's key count. The asymmetry is part
//! of the contract: `pearson(a, b)` and `pearson(b, a)` may differ, and
//! previously computed scores stay comparable only if it is kept.
//!
//! # Pairing
//! [`nearest_neighbors`] runs the single-pass seed step of agglomerative
//! clustering: each document is matched with its best-scoring later document.
//! It is O(n²) in the number of documents.

mod pairing;
mod pearson;

pub use pairing::{Pairing, nearest_neighbors};
pub use pearson::{FrequencySums, common_keys, freq_product, freq_sum, freq_sum_squares, pearson};
