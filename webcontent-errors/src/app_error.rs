use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Failures local to a single fetch or parse step. Never retried; the
/// pipeline wraps them into an `AppError` together with the request
/// identifier.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("not parseable as HTML: {0}")]
    Parse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing ?url= parameter")]
    MissingUrl,

    #[error("Invalid URL")]
    InvalidUrl,

    #[error("Missing ?q= parameter")]
    MissingQuery,

    #[error("Failed to extract content")]
    ExtractionFailed {
        url: String,
        #[source]
        source: ScrapeError,
    },

    #[error("Search failed")]
    SearchFailed {
        query: String,
        #[source]
        source: ScrapeError,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::MissingUrl | AppError::InvalidUrl | AppError::MissingQuery => {
                (StatusCode::BAD_REQUEST, json!({ "error": self.to_string() }))
            }
            AppError::ExtractionFailed { url, source } => (
                StatusCode::BAD_GATEWAY,
                json!({
                    "error": self.to_string(),
                    "detail": source.to_string(),
                    "url": url,
                }),
            ),
            AppError::SearchFailed { query, source } => (
                StatusCode::BAD_GATEWAY,
                json!({
                    "error": self.to_string(),
                    "detail": source.to_string(),
                    "query": query,
                }),
            ),
        };
        (status, Json(body)).into_response()
    }
}
