use std::future::Future;

use log::debug;
use url::Url;

use crate::error::{Error, Result};

/// Fetch-by-url seam between the sync engine and the network.
pub trait Fetch {
    /// Body of `url` as text
    fn fetch_text(&self, url: &Url) -> impl Future<Output = Result<String>> + Send;

    /// Body of `url` as raw bytes
    fn fetch_bytes(&self, url: &Url) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// Plain HTTP fetcher on top of reqwest, no retries and default timeouts
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    async fn get(&self, url: &Url) -> Result<reqwest::Response> {
        let res = self.client.get(url.clone()).send().await?;
        debug!("GET {} -> {}", url, res.status());

        if !res.status().is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: res.status().as_u16(),
            });
        }
        Ok(res)
    }
}

impl Fetch for HttpFetcher {
    async fn fetch_text(&self, url: &Url) -> Result<String> {
        let res = self.get(url).await?;
        Ok(res.text().await?)
    }

    async fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>> {
        let res = self.get(url).await?;
        let bytes = res.bytes().await?;
        Ok(bytes.to_vec())
    }
}
