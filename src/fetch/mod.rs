//! Content fetching: turning a location into raw text.
//!
//! The corpus depends only on the synchronous [`ContentFetcher`] contract.
//! [`SourceFetcher`] is the default used by the CLI: `http://` and
//! `https://` locations go over the network, everything else is read from
//! the local filesystem.

mod file;
mod http;

pub use file::FileFetcher;
pub use http::HttpFetcher;

use crate::config::FetchConfig;
use crate::error::FetchResult;

/// Source of raw document text.
///
/// Implementations must be shareable across threads; the corpus may call
/// `fetch` for several locations in parallel.
pub trait ContentFetcher: Send + Sync {
    /// Fetch the full text stored at `location`.
    fn fetch(&self, location: &str) -> FetchResult<String>;
}

impl<F> ContentFetcher for F
where
    F: Fn(&str) -> FetchResult<String> + Send + Sync,
{
    fn fetch(&self, location: &str) -> FetchResult<String> {
        self(location)
    }
}

/// Dispatches on the location scheme.
#[derive(Debug)]
pub struct SourceFetcher {
    http: HttpFetcher,
    file: FileFetcher,
}

impl SourceFetcher {
    pub fn new(config: &FetchConfig) -> FetchResult<Self> {
        Ok(Self {
            http: HttpFetcher::new(config)?,
            file: FileFetcher,
        })
    }
}

impl ContentFetcher for SourceFetcher {
    fn fetch(&self, location: &str) -> FetchResult<String> {
        if is_http_location(location) {
            self.http.fetch(location)
        } else {
            self.file.fetch(location)
        }
    }
}

pub(crate) fn is_http_location(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;

    #[test]
    fn test_scheme_detection() {
        assert!(is_http_location("http://example.com"));
        assert!(is_http_location("HTTPS://example.com/page"));
        assert!(!is_http_location("file:///tmp/a.txt"));
        assert!(!is_http_location("./notes.txt"));
    }

    #[test]
    fn test_closure_fetcher() {
        let fetcher = |location: &str| -> FetchResult<String> {
            if location == "ok" {
                Ok("text".to_string())
            } else {
                Err(FetchError::InvalidLocation {
                    location: location.to_string(),
                    reason: "unknown".to_string(),
                })
            }
        };

        assert_eq!(fetcher.fetch("ok").unwrap(), "text");
        assert!(fetcher.fetch("nope").is_err());
    }
}
