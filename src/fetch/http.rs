use crate::config::FetchConfig;
use crate::error::{FetchError, FetchResult};
use crate::fetch::ContentFetcher;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

/// Blocking HTTP(S) fetcher.
///
/// Uses the configured proxy when one is set. Otherwise reqwest picks up
/// `http_proxy` / `https_proxy` from the environment. Must not be created
/// or dropped on an async runtime thread.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> FetchResult<Self> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone());

        if let Some(proxy_url) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| FetchError::ClientInit {
                reason: format!("invalid proxy '{proxy_url}': {e}"),
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(|e| FetchError::ClientInit {
            reason: e.to_string(),
        })?;

        Ok(Self { client })
    }
}

impl ContentFetcher for HttpFetcher {
    fn fetch(&self, location: &str) -> FetchResult<String> {
        let http_error = |source| FetchError::Http {
            location: location.to_string(),
            source,
        };

        debug!("GET {location}");
        let response = self.client.get(location).send().map_err(http_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                location: location.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(http_error)?;
        debug!("Fetched {} bytes from {location}", body.len());
        Ok(body)
    }
}
