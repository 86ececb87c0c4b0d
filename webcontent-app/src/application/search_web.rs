use url::Url;
use webcontent_errors::{AppError, ScrapeError};

use crate::domain::SearchResponse;
use crate::infrastructure::fetcher::PageFetcher;
use crate::infrastructure::html::ParsedDocument;
use crate::infrastructure::search::{self, SEARCH_ENDPOINT};

pub const DEFAULT_LIMIT: usize = 10;

/// Hard ceiling regardless of what the client asks for.
pub const MAX_LIMIT: usize = 20;

/// Query in, `SearchResponse` out: fetch the engine's HTML results page and
/// parse it into typed records.
pub struct SearchWeb {
    fetcher: PageFetcher,
    endpoint: Url,
}

impl SearchWeb {
    pub fn new() -> Self {
        Self::with_parts(
            PageFetcher::new(),
            Url::parse(SEARCH_ENDPOINT).expect("static endpoint URL parses"),
        )
    }

    pub fn with_parts(fetcher: PageFetcher, endpoint: Url) -> Self {
        Self { fetcher, endpoint }
    }

    /// Missing, non-numeric, or non-positive limits fall back to the
    /// default; everything is capped at `MAX_LIMIT`.
    pub fn clamp_limit(raw: Option<&str>) -> usize {
        raw.and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|&n| n > 0)
            .map(|n| (n as usize).min(MAX_LIMIT))
            .unwrap_or(DEFAULT_LIMIT)
    }

    pub async fn execute(&self, query: &str, limit: usize) -> Result<SearchResponse, AppError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::MissingQuery);
        }

        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("q", query);

        let raw = self
            .fetcher
            .fetch(&url)
            .await
            .map_err(|e| failed(query, e))?;
        let doc = ParsedDocument::parse(&raw.html).map_err(|e| failed(query, e))?;

        let results = search::parse_results(&doc, limit);

        Ok(SearchResponse {
            query: query.to_string(),
            count: results.len(),
            results,
        })
    }
}

impl Default for SearchWeb {
    fn default() -> Self {
        Self::new()
    }
}

fn failed(query: &str, source: ScrapeError) -> AppError {
    tracing::warn!("search failed for {:?}: {}", query, source);
    AppError::SearchFailed {
        query: query.to_string(),
        source,
    }
}
