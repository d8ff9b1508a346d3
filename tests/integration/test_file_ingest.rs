//! Ingestion from local files through the default source fetcher.

use crate::common::TestDocuments;
use winston::config::FetchConfig;
use winston::{
    ContentFetcher, Corpus, CorpusError, DocumentId, FetchError, FileFetcher, SharedCorpus,
    SourceFetcher,
};

#[test]
fn test_source_fetcher_reads_files() {
    let docs = TestDocuments::new();
    let path = docs.add_file("page.html", "<h1>Title</h1>. Body text. End.");

    let fetcher = SourceFetcher::new(&FetchConfig::default()).expect("client should build");
    let plain = fetcher.fetch(path.to_str().unwrap()).unwrap();
    let url = fetcher.fetch(&format!("file://{}", path.display())).unwrap();

    assert_eq!(plain, url);
    assert!(plain.starts_with("<h1>"));
}

#[test]
fn test_ingest_files_in_argument_order() {
    let docs = TestDocuments::new();
    let paths: Vec<String> = ["c.txt", "a.txt", "b.txt"]
        .iter()
        .map(|name| {
            docs.add_file(name, &format!("Shared words. {name} only."))
                .display()
                .to_string()
        })
        .collect();

    let shared = SharedCorpus::default();
    let results = shared.ingest_all(&FileFetcher, &paths);

    let ids: Vec<DocumentId> = results.into_iter().map(|r| r.unwrap()).collect();
    assert_eq!(ids, vec![DocumentId(0), DocumentId(1), DocumentId(2)]);

    let corpus = shared.read();
    let locations: Vec<&str> = corpus.query_token("shared");
    assert_eq!(locations, paths.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn test_missing_file_is_reported_and_skipped() {
    let docs = TestDocuments::new();
    let good = docs.add_file("good.txt", "fine. text.");
    let missing = docs.dir.path().join("missing.txt");
    let locations = [
        missing.display().to_string(),
        good.display().to_string(),
    ];

    let mut corpus = Corpus::new();
    let err = corpus.add_from(&FileFetcher, &locations[0]).unwrap_err();
    assert!(matches!(
        err,
        CorpusError::Fetch(FetchError::FileRead { .. })
    ));
    assert_eq!(err.status_code(), "FILE_READ_ERROR");
    assert!(!err.recovery_suggestions().is_empty());

    let id = corpus.add_from(&FileFetcher, &locations[1]).unwrap();
    assert_eq!(id, DocumentId(0));
    assert_eq!(corpus.len(), 1);
}
