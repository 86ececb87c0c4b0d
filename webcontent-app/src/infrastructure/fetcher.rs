use std::time::Duration;

use chrono::Utc;
use url::Url;
use webcontent_errors::ScrapeError;

use crate::domain::RawDocument;

const USER_AGENT: &str =
    "Mozilla/5.0 (compatible; WebContentAPI/1.0; +https://github.com/web-content-api)";
const ACCEPT: &str = "text/html,application/xhtml+xml,*/*";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Retrieves raw HTML for one URL with a hard timeout and a fixed identity.
/// Exactly one outbound request per call; retries are the caller's problem.
pub struct PageFetcher {
    http_client: reqwest::Client,
    timeout_ms: u64,
}

impl PageFetcher {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_MS)
    }

    pub fn with_timeout(timeout_ms: u64) -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .timeout(Duration::from_millis(timeout_ms))
                .redirect(reqwest::redirect::Policy::limited(10))
                .build()
                .expect("Failed to create HTTP client"),
            timeout_ms,
        }
    }

    pub async fn fetch(&self, url: &Url) -> Result<RawDocument, ScrapeError> {
        let response = self
            .http_client
            .get(url.as_str())
            .header("User-Agent", USER_AGENT)
            .header("Accept", ACCEPT)
            .header("Accept-Language", ACCEPT_LANGUAGE)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Http {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }

        let html = response.text().await.map_err(|e| self.classify(e))?;

        Ok(RawDocument {
            source_url: url.clone(),
            html,
            fetched_at: Utc::now(),
        })
    }

    fn classify(&self, e: reqwest::Error) -> ScrapeError {
        if e.is_timeout() {
            ScrapeError::Timeout {
                timeout_ms: self.timeout_ms,
            }
        } else if e.is_connect() {
            ScrapeError::Network(format!("connection failed: {e}"))
        } else {
            ScrapeError::Network(e.to_string())
        }
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new()
    }
}
