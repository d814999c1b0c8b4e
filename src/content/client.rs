use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::timeout;

use crate::config::ContentConfig;
use crate::content::decode::decode_stories;
use crate::content::error::ContentError;
use crate::slides::Slide;

/// Path of the digest endpoint relative to the provider base URL.
pub const NEWS_PATH: &str = "/api/news";

/// HTTP client for the content provider.
pub struct NewsClient {
    client: Client,
    endpoint: String,
    request_timeout: Duration,
}

impl NewsClient {
    pub fn new(config: &ContentConfig) -> Result<Self, ContentError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .build()
            .map_err(ContentError::Client)?;

        Ok(Self {
            client,
            endpoint: news_endpoint(&config.base_url),
            request_timeout: Duration::from_secs(config.timeout_seconds.into()),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches and decodes the digest once.
    pub async fn fetch(&self) -> Result<Vec<Slide>, ContentError> {
        match timeout(self.request_timeout, self.do_fetch()).await {
            Ok(result) => result,
            Err(_) => Err(ContentError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }

    async fn do_fetch(&self) -> Result<Vec<Slide>, ContentError> {
        tracing::debug!(endpoint = %self.endpoint, "Fetching digest");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|source| ContentError::Request {
                url: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ContentError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ContentError::Request {
                url: self.endpoint.clone(),
                source,
            })?;

        decode_stories(&body)
    }
}

/// Joins the provider base URL and [`NEWS_PATH`].
pub fn news_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim().trim_end_matches('/'), NEWS_PATH)
}
