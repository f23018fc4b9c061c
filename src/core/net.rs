// src/core/net.rs
// Blocking HTTP GET. One client per run; no retries.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Result, ScrapeError};

/// Anything that can turn a URL into an HTML body.
/// The scrape pipeline only talks to this, so tests can serve fixtures.
pub trait Fetch {
    fn fetch(&self, url: &Url) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(ScrapeError::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<String> {
        let network = |source| ScrapeError::Network { url: url.to_string(), source };

        log::info!("GET {url}");
        let resp = self.client.get(url.clone()).send().map_err(network)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { url: url.to_string(), status: status.as_u16() });
        }

        let body = resp.text().map_err(network)?;
        log::debug!("{} bytes from {url}", body.len());
        Ok(body)
    }
}
