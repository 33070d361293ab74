use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::config::SourceConfig;
use crate::fetch::{FetchError, PageFetcher, PageIndex};
use crate::market::{Coin, CoinPage};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

const ENDPOINT_PATH: &str = "coin-prices-all";
const ERROR_EXCERPT_CHARS: usize = 200;

/// Fetches coin pages from the `coin-prices-all` HTTP endpoint.
pub struct HttpPageFetcher {
    client: Client,
    endpoint: Url,
    currency: String,
    page_size: u32,
}

impl HttpPageFetcher {
    pub fn new(source: &SourceConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(source.connect_timeout_seconds)))
            .build()
            .map_err(|source| FetchError::Client { source })?;

        let raw = format!("{}/{}", source.base_url.trim_end_matches('/'), ENDPOINT_PATH);
        let endpoint = Url::parse(&raw).map_err(|e| FetchError::InvalidEndpoint {
            url: raw.clone(),
            message: e.to_string(),
        })?;

        Ok(Self {
            client,
            endpoint,
            currency: source.currency.clone(),
            page_size: source.page_size,
        })
    }

    /// Full request URL for `page`, including query parameters.
    pub fn page_url(&self, page: PageIndex) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("currency", &self.currency)
            .append_pair("page", &page.get().to_string())
            .append_pair("pageSize", &self.page_size.to_string());
        url
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, page: PageIndex) -> Result<Vec<Coin>, FetchError> {
        let url = self.page_url(page);
        tracing::debug!(page = page.get(), url = %url, "Requesting coin page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Connection { source })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: excerpt(&body),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| FetchError::Connection { source })?;
        let parsed: CoinPage =
            serde_json::from_slice(&bytes).map_err(|source| FetchError::Malformed { source })?;

        tracing::debug!(page = page.get(), count = parsed.data.len(), "Coin page received");
        Ok(parsed.data)
    }
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= ERROR_EXCERPT_CHARS {
        return trimmed.to_string();
    }
    let mut cut: String = trimmed.chars().take(ERROR_EXCERPT_CHARS).collect();
    cut.push('…');
    cut
}
