#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use winston::{ContentFetcher, FetchError, FetchResult};

/// In-memory fetcher keyed by location.
#[derive(Default)]
pub struct MapFetcher {
    pages: HashMap<String, String>,
}

impl MapFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, location: &str, text: &str) -> Self {
        self.pages.insert(location.to_string(), text.to_string());
        self
    }
}

impl ContentFetcher for MapFetcher {
    fn fetch(&self, location: &str) -> FetchResult<String> {
        self.pages
            .get(location)
            .cloned()
            .ok_or_else(|| FetchError::InvalidLocation {
                location: location.to_string(),
                reason: "not registered".to_string(),
            })
    }
}

/// Temporary directory holding documents on disk.
pub struct TestDocuments {
    pub dir: TempDir,
}

impl TestDocuments {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn add_file(&self, name: &str, content: &str) -> PathBuf {
        let file_path = self.dir.path().join(name);
        fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }
}
