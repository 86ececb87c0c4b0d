use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use webcontent_app::domain::ExtractionResult;
use webcontent_app::AppContext;
use webcontent_errors::AppError;

#[derive(Debug, Deserialize)]
pub struct ExtractParams {
    url: Option<String>,
}

pub async fn handle(
    State(ctx): State<AppContext>,
    Query(params): Query<ExtractParams>,
) -> Result<Json<ExtractionResult>, AppError> {
    let url = params
        .url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or(AppError::MissingUrl)?;

    Ok(Json(ctx.extract_content.execute(url).await?))
}
