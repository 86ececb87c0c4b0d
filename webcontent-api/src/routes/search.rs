use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use webcontent_app::application::SearchWeb;
use webcontent_app::domain::SearchResponse;
use webcontent_app::AppContext;
use webcontent_errors::AppError;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
    limit: Option<String>,
}

pub async fn handle(
    State(ctx): State<AppContext>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let query = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or(AppError::MissingQuery)?;
    let limit = SearchWeb::clamp_limit(params.limit.as_deref());

    Ok(Json(ctx.search_web.execute(query, limit).await?))
}
