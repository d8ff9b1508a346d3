//! End-to-end behaviour of the corpus through the public API.
//!
//! Covers document construction, token and sentence queries, similarity and
//! pairing on small hand-checked corpora.

use crate::common::MapFetcher;
use std::collections::HashMap;
use winston::text::normalize;
use winston::{
    Corpus, CorpusError, Document, DocumentId, FrequencyMap, Multiplicity, SharedCorpus,
    nearest_neighbors, pearson,
};

fn frequency(pairs: &[(&str, usize)]) -> FrequencyMap {
    pairs
        .iter()
        .map(|(token, count)| (token.to_string(), *count))
        .collect::<HashMap<_, _>>()
}

#[test]
fn test_normalization_is_idempotent_on_documents() {
    let samples = [
        "<html><body><p>First. Second!</p></body></html>",
        "Numbers 1 2 3 and symbols #$% everywhere.",
        "ALL CAPS. all lower. MiXeD.",
        "",
    ];

    for sample in samples {
        let doc = Document::new("sample", sample);
        assert_eq!(normalize(doc.normalized_text()), doc.normalized_text());
    }
}

#[test]
fn test_frequency_conservation() {
    let texts = [
        "the cat and the hat",
        "  leading and trailing  ",
        "",
        "<p>one</p><p>two</p> two two",
    ];

    for text in texts {
        let doc = Document::new("doc", text);
        let total: usize = doc.frequency().values().sum();
        assert_eq!(total, doc.tokens().len(), "conservation failed for {text:?}");
        assert!(doc.frequency().values().all(|count| *count >= 1));
    }
}

#[test]
fn test_empty_text_yields_single_empty_token() {
    let doc = Document::new("empty", "");
    assert_eq!(doc.normalized_text(), "");
    assert_eq!(doc.tokens(), [String::new()]);
    assert_eq!(doc.frequency().get(""), Some(&1));
    assert!(doc.sentence_boundaries().is_empty());
}

#[test]
fn test_pearson_literal_zero_denominator() {
    let a = frequency(&[("a", 1), ("b", 1)]);
    let b = frequency(&[("a", 1), ("b", 1), ("c", 1)]);

    assert_eq!(pearson(&a, &b), 0.0);
}

#[test]
fn test_pearson_uses_left_key_count() {
    let a = frequency(&[("x", 3), ("y", 1)]);
    let b = frequency(&[("x", 1), ("y", 2), ("z", 4)]);

    // n = 2 from A. product = 3 + 2 = 5, sum(A) = 4, sum(B) = 7
    // num = 5 - 28/2 = -9
    // den = sqrt((10 - 8) * (21 - 24.5)) -> negative radicand -> NaN
    assert!(pearson(&a, &b).is_nan());

    let c = frequency(&[("x", 2), ("y", 4)]);
    // n = 2. product = 6 + 4 = 10, sum(A) = 4, sum(C) = 6
    // num = 10 - 12 = -2, den = sqrt(2 * (20 - 18)) = 2
    assert!((pearson(&a, &c) + 1.0).abs() < 1e-12);
}

#[test]
fn test_pearson_empty_map_is_zero() {
    let empty = FrequencyMap::new();
    let other = frequency(&[("a", 2)]);

    assert_eq!(pearson(&empty, &other), 0.0);
    assert_eq!(pearson(&empty, &empty), 0.0);
}

#[test]
fn test_index_multiplicity_per_occurrence() {
    let mut corpus = Corpus::new();
    corpus.add("a a b", "doc");

    assert_eq!(corpus.query_token("a"), vec!["doc", "doc"]);
    assert_eq!(corpus.query_token("b"), vec!["doc"]);
}

#[test]
fn test_index_multiplicity_per_document() {
    let mut corpus = Corpus::with_multiplicity(Multiplicity::PerDocument);
    corpus.add("a a b", "first");
    corpus.add("b a", "second");

    assert_eq!(corpus.query_token("a"), vec!["first", "second"]);
    assert_eq!(corpus.query_token("b"), vec!["first", "second"]);
}

#[test]
fn test_duplicate_locations_are_kept() {
    let mut corpus = Corpus::new();
    let first = corpus.add("red", "same");
    let second = corpus.add("red", "same");

    assert_ne!(first, second);
    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.query_token("red"), vec!["same", "same"]);
}

#[test]
fn test_sentence_boundaries_and_half_open_slice() {
    let text = "Hello. World. Bye";
    let doc = Document::new("hello", text);
    assert_eq!(doc.sentence_boundaries(), [5, 12]);

    let mut corpus = Corpus::new();
    corpus.add(text, "hello");

    let matches = corpus.query_substring("World");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].sentence, &text[5..12]);
    assert_eq!(matches[0].sentence, ". World");
}

#[test]
fn test_fewer_than_two_boundaries_give_no_sentences() {
    let mut corpus = Corpus::new();
    corpus.add("No periods at all", "none");
    corpus.add("Exactly one. period", "one");

    assert!(corpus.query_substring("period").is_empty());
    assert!(corpus.query_substring("").is_empty());
}

#[test]
fn test_consecutive_periods_are_separate_boundaries() {
    let mut corpus = Corpus::new();
    corpus.add("Wait... what.", "ellipsis");

    let doc = corpus.get(DocumentId(0)).unwrap();
    assert_eq!(doc.sentence_boundaries(), [4, 5, 6, 12]);

    let matches = corpus.query_substring("what");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].sentence, ". what");
}

#[test]
fn test_nearest_neighbor_tie_break() {
    let docs = vec![
        Document::new("d0", "one two two three"),
        Document::new("d1", "one two two three three"),
        Document::new("d2", "one two two three three"),
    ];

    let pairs = nearest_neighbors(&docs);
    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[0].right, Some(DocumentId(1)));
    assert_eq!(pairs[1].right, Some(DocumentId(2)));
    assert_eq!(pairs[2].right, None);
    assert_eq!(pairs[2].score, 0.0);
}

#[test]
fn test_empty_corpus_never_errors() {
    let corpus = Corpus::new();

    for query in ["", "a", "the", "Hello"] {
        assert!(corpus.query_token(query).is_empty());
        assert!(corpus.query_substring(query).is_empty());
    }
    assert!(corpus.nearest_neighbors().is_empty());
    assert!(matches!(
        corpus.similarity(DocumentId(0), DocumentId(0)),
        Err(CorpusError::DocumentNotFound { .. })
    ));
}

#[test]
fn test_failed_fetch_does_not_partially_ingest() {
    let fetcher = MapFetcher::new().with("mem://a", "alpha. beta. gamma");
    let mut corpus = Corpus::new();

    assert!(corpus.add_from(&fetcher, "mem://missing").is_err());
    assert!(corpus.is_empty());
    assert!(corpus.index().is_empty());

    assert_eq!(corpus.add_from(&fetcher, "mem://a").unwrap(), DocumentId(0));
    assert_eq!(corpus.query_token("beta"), vec!["mem://a"]);
}

#[test]
fn test_shared_ingest_matches_sequential_ingest() {
    let fetcher = MapFetcher::new()
        .with("mem://1", "apples. pears and apples. plums")
        .with("mem://2", "Pears. Pears again. done")
        .with("mem://3", "<b>plums</b> only. here.");
    let locations = ["mem://1", "mem://2", "mem://bad", "mem://3"];

    let mut sequential = Corpus::new();
    for location in locations {
        let _ = sequential.add_from(&fetcher, location);
    }

    let shared = SharedCorpus::default();
    let results = shared
        .ingest_all_with_threads(&fetcher, &locations, 3)
        .unwrap();
    assert_eq!(results.iter().filter(|r| r.is_err()).count(), 1);

    let parallel = shared.try_into_inner().unwrap();
    assert_eq!(parallel.len(), sequential.len());
    for token in ["apples", "pears", "plums", "only"] {
        assert_eq!(parallel.query_token(token), sequential.query_token(token));
    }
    assert_eq!(
        parallel.query_substring("Pears"),
        sequential.query_substring("Pears")
    );
    assert_eq!(parallel.nearest_neighbors(), sequential.nearest_neighbors());
}
