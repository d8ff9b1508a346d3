//! Document similarity and retrieval over fetched text.
//!
//! Raw text is normalized, segmented into sentences, tokenized and counted
//! into a [`Document`]. A [`Corpus`] owns the documents plus an inverted
//! index and answers exact-token and sentence-substring queries. Documents
//! are compared with an asymmetric Pearson correlation over token counts.

pub mod config;
pub mod corpus;
pub mod display;
pub mod document;
pub mod error;
pub mod fetch;
pub mod index;
pub mod io;
pub mod similarity;
pub mod text;
pub mod types;

// Explicit exports for better API clarity
pub use config::Settings;
pub use corpus::{Corpus, SentenceMatch, SharedCorpus};
pub use document::{Document, FrequencyMap};
pub use error::{CorpusError, CorpusResult, FetchError, FetchResult};
pub use fetch::{ContentFetcher, FileFetcher, HttpFetcher, SourceFetcher};
pub use index::{InvertedIndex, Multiplicity};
pub use similarity::{Pairing, nearest_neighbors, pearson};
pub use types::{DocumentId, DocumentStats};
