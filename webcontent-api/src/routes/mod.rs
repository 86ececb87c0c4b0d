mod extract;
mod search;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::compression::CompressionLayer;
use webcontent_app::AppContext;

pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
        .route("/api/extract", get(extract::handle))
        .route("/api/search", get(search::handle))
        .layer(CompressionLayer::new())
        .with_state(ctx)
}

async fn service_info() -> Json<serde_json::Value> {
    Json(json!({
        "name": "Web Content API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Web content extraction and search.",
        "endpoints": {
            "GET /api/extract?url=": "Extract clean text content from any URL",
            "GET /api/search?q=": "Search the web and return structured results",
        },
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
