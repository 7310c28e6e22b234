use crate::models::Locale;
use crate::services::blog;
use crate::web::error::AppResult;
use crate::web::state::AppState;
use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct BlogParams {
    pub language: Option<String>,
}

/// GET /api/blog?language: published previews, newest first.
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BlogParams>,
) -> AppResult<Json<serde_json::Value>> {
    let language = Locale::parse_or_default(params.language.as_deref().unwrap_or_default());
    let previews = blog::list_previews(&state.db, language)?;
    Ok(Json(serde_json::json!({ "posts": previews })))
}
