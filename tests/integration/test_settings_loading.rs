//! Settings file flowing through to corpus behaviour.

use std::fs;
use tempfile::TempDir;
use winston::{Corpus, Multiplicity, Settings};

#[test]
fn test_multiplicity_from_file_reaches_index() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("settings.toml");
    fs::write(
        &config_path,
        r#"
[index]
multiplicity = "per_document"

[fetch]
timeout_secs = 5
"#,
    )
    .unwrap();

    let settings = Settings::load_from(&config_path).expect("settings should load");
    assert_eq!(settings.index.multiplicity, Multiplicity::PerDocument);

    let mut corpus = Corpus::from_settings(&settings);
    corpus.add("echo echo echo", "loud");
    corpus.add("echo", "quiet");
    assert_eq!(corpus.query_token("echo"), vec!["loud", "quiet"]);
}

#[test]
fn test_saved_proxy_round_trips() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join(".winston").join("settings.toml");

    let mut settings = Settings::default();
    settings.fetch.proxy = Some("http://proxy.local:3128".to_string());
    settings.ingest.parallel_threads = 2;
    settings.save(&config_path).unwrap();

    let loaded = Settings::load_from(&config_path).unwrap();
    assert_eq!(loaded.fetch.proxy.as_deref(), Some("http://proxy.local:3128"));
    assert_eq!(loaded.ingest.parallel_threads, 2);
    assert_eq!(loaded.index.multiplicity, Multiplicity::PerOccurrence);
}
