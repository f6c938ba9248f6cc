//! HTTP page fetching with client identification.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::USER_AGENT;
use crate::error::{Result, ScrapeError};

/// Source of page text for the crawl loop. Abstracting the fetch keeps the
/// loop's partial-failure behavior testable without a network.
#[async_trait]
pub trait PageFetcher {
    /// Retrieve one document as text. Any transport failure or non-success
    /// status is an error; the caller decides whether to skip or abort.
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

/// Sequential HTTP client for the catalog site.
///
/// No retries and no pacing here; the crawl loop owns the inter-request
/// delay so single-URL fetches are not slowed down.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .gzip(true)
            .brotli(true)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpClient {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Http {
                status,
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}
