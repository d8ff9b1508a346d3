use crate::error::{FetchError, FetchResult};
use crate::fetch::ContentFetcher;
use std::path::PathBuf;

/// Reads `file://` URLs and plain filesystem paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFetcher;

impl FileFetcher {
    fn resolve(location: &str) -> FetchResult<PathBuf> {
        let path = location.strip_prefix("file://").unwrap_or(location);
        if path.is_empty() {
            return Err(FetchError::InvalidLocation {
                location: location.to_string(),
                reason: "empty path".to_string(),
            });
        }
        Ok(PathBuf::from(path))
    }
}

impl ContentFetcher for FileFetcher {
    fn fetch(&self, location: &str) -> FetchResult<String> {
        let path = Self::resolve(location)?;
        std::fs::read_to_string(&path).map_err(|source| FetchError::FileRead { path, source })
    }
}
