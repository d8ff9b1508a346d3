//! The corpus: an append-only document collection plus its inverted index.
//!
//! [`Corpus`] is a plain owned value with `&mut self` ingestion and `&self`
//! queries. [`SharedCorpus`] wraps it in a reader/writer lock for callers
//! that ingest from several threads: documents are fetched and built with
//! no lock held, and only the final append takes the write lock.

use crate::config::Settings;
use crate::document::Document;
use crate::error::{CorpusError, CorpusResult};
use crate::fetch::ContentFetcher;
use crate::index::{InvertedIndex, Multiplicity};
use crate::similarity::{Pairing, nearest_neighbors, pearson};
use crate::types::DocumentId;
use parking_lot::{RwLock, RwLockReadGuard};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A sentence that matched a substring query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceMatch {
    pub document: DocumentId,
    pub location: String,
    /// Raw slice `[b_i, b_{i+1})`, leading period included
    pub sentence: String,
}

impl fmt::Display for SentenceMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.sentence.trim())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    index: InvertedIndex,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_multiplicity(multiplicity: Multiplicity) -> Self {
        Self {
            documents: Vec::new(),
            index: InvertedIndex::with_multiplicity(multiplicity),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_multiplicity(settings.index.multiplicity)
    }

    /// Build a document from `raw_text` and append it.
    ///
    /// No uniqueness check is made on `location`.
    pub fn add(&mut self, raw_text: impl Into<String>, location: impl Into<String>) -> DocumentId {
        self.push(Document::new(location, raw_text))
    }

    /// Fetch `location` and add the result.
    ///
    /// A fetch failure is returned as-is and leaves the corpus untouched.
    pub fn add_from<F>(&mut self, fetcher: &F, location: &str) -> CorpusResult<DocumentId>
    where
        F: ContentFetcher + ?Sized,
    {
        let raw_text = fetcher.fetch(location)?;
        Ok(self.add(raw_text, location))
    }

    /// Append an already built document and index its tokens.
    pub fn push(&mut self, document: Document) -> DocumentId {
        let id = DocumentId::from_index(self.documents.len());
        self.index.update(id, document.tokens());
        debug!(
            "Indexed {id} ({}): {} tokens, {} distinct",
            document.location(),
            document.tokens().len(),
            document.frequency().len()
        );
        self.documents.push(document);
        id
    }

    /// Locations of documents listed under `token`, in index order.
    ///
    /// Duplicates follow the index multiplicity.
    pub fn query_token(&self, token: &str) -> Vec<&str> {
        self.index
            .lookup(token)
            .iter()
            .filter_map(|id| self.get(*id))
            .map(Document::location)
            .collect()
    }

    /// Every sentence slice, across all documents, containing `needle`.
    ///
    /// Matching is case-sensitive against the raw text.
    pub fn query_substring(&self, needle: &str) -> Vec<SentenceMatch> {
        self.documents
            .iter()
            .enumerate()
            .flat_map(|(i, doc)| {
                doc.sentences()
                    .filter(move |sentence| sentence.contains(needle))
                    .map(move |sentence| SentenceMatch {
                        document: DocumentId::from_index(i),
                        location: doc.location().to_string(),
                        sentence: sentence.to_string(),
                    })
            })
            .collect()
    }

    pub fn nearest_neighbors(&self) -> Vec<Pairing> {
        nearest_neighbors(&self.documents)
    }

    /// `pearson(a, b)` for two documents in this corpus.
    pub fn similarity(&self, a: DocumentId, b: DocumentId) -> CorpusResult<f64> {
        let left = self.require(a)?;
        let right = self.require(b)?;
        Ok(pearson(left.frequency(), right.frequency()))
    }

    /// Scores of each document against the one ingested right after it.
    pub fn adjacent_similarities(&self) -> Vec<f64> {
        self.documents
            .windows(2)
            .map(|pair| pearson(pair[0].frequency(), pair[1].frequency()))
            .collect()
    }

    pub fn get(&self, id: DocumentId) -> Option<&Document> {
        self.documents.get(id.index())
    }

    fn require(&self, id: DocumentId) -> CorpusResult<&Document> {
        self.get(id).ok_or(CorpusError::DocumentNotFound { id })
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Thread-safe handle to a [`Corpus`].
///
/// Cloning shares the same corpus. Queries take the read lock and may run
/// concurrently; appends take the write lock, so a query never observes a
/// half-applied `add`.
#[derive(Debug, Clone, Default)]
pub struct SharedCorpus {
    inner: Arc<RwLock<Corpus>>,
}

impl SharedCorpus {
    pub fn new(corpus: Corpus) -> Self {
        Self {
            inner: Arc::new(RwLock::new(corpus)),
        }
    }

    /// Shared read access for queries not covered by the helpers below.
    pub fn read(&self) -> RwLockReadGuard<'_, Corpus> {
        self.inner.read()
    }

    pub fn add(&self, raw_text: impl Into<String>, location: impl Into<String>) -> DocumentId {
        let document = Document::new(location, raw_text);
        self.inner.write().push(document)
    }

    /// Fetch and build without holding the lock, then append.
    pub fn add_from<F>(&self, fetcher: &F, location: &str) -> CorpusResult<DocumentId>
    where
        F: ContentFetcher + ?Sized,
    {
        let raw_text = fetcher.fetch(location)?;
        let document = Document::new(location, raw_text);
        Ok(self.inner.write().push(document))
    }

    /// Fetch and build all `locations` in parallel on the current rayon pool.
    ///
    /// Successful documents are appended in input order under a single write
    /// lock, so ids follow the order of `locations` regardless of which fetch
    /// finished first. One result per location is returned, in order; a
    /// failed location appends nothing.
    pub fn ingest_all<F, S>(&self, fetcher: &F, locations: &[S]) -> Vec<CorpusResult<DocumentId>>
    where
        F: ContentFetcher + ?Sized,
        S: AsRef<str> + Sync,
    {
        let built: Vec<CorpusResult<Document>> = locations
            .par_iter()
            .map(|location| -> CorpusResult<Document> {
                let location = location.as_ref();
                let raw_text = fetcher.fetch(location)?;
                Ok(Document::new(location, raw_text))
            })
            .collect();

        let mut corpus = self.inner.write();
        let results: Vec<CorpusResult<DocumentId>> = built
            .into_iter()
            .map(|result| {
                result.map(|document| corpus.push(document)).inspect_err(|e| {
                    warn!("Skipping document: {e}");
                })
            })
            .collect();

        info!(
            "Ingested {} of {} locations ({} documents total)",
            results.iter().filter(|r| r.is_ok()).count(),
            locations.len(),
            corpus.len()
        );
        results
    }

    /// [`ingest_all`](Self::ingest_all) on a dedicated pool of `threads` workers.
    pub fn ingest_all_with_threads<F, S>(
        &self,
        fetcher: &F,
        locations: &[S],
        threads: usize,
    ) -> CorpusResult<Vec<CorpusResult<DocumentId>>>
    where
        F: ContentFetcher + ?Sized,
        S: AsRef<str> + Sync,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| CorpusError::General(format!("Failed to build ingest pool: {e}")))?;

        Ok(pool.install(|| self.ingest_all(fetcher, locations)))
    }

    pub fn query_token(&self, token: &str) -> Vec<String> {
        self.read()
            .query_token(token)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn query_substring(&self, needle: &str) -> Vec<SentenceMatch> {
        self.read().query_substring(needle)
    }

    pub fn nearest_neighbors(&self) -> Vec<Pairing> {
        self.read().nearest_neighbors()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Take the corpus back out if this is the last handle.
    pub fn try_into_inner(self) -> Result<Corpus, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}
