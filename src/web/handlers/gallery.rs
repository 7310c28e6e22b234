use crate::models::{GalleryPage, Locale};
use crate::services::gallery;
use crate::web::error::AppResult;
use crate::web::state::AppState;
use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct GalleryParams {
    pub page: Option<usize>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<usize>,
    pub locale: Option<String>,
    pub tag: Option<String>,
}

#[derive(Deserialize)]
pub struct TagParams {
    pub locale: Option<String>,
}

// Caps the page number so OFFSET stays well inside i64 for any page size.
const MAX_PAGE: usize = u32::MAX as usize;

fn paginate(
    page: Option<usize>,
    page_size: Option<usize>,
    default_size: usize,
    max_size: usize,
) -> (usize, usize) {
    let page = page.unwrap_or(1).clamp(1, MAX_PAGE);
    let page_size = page_size.unwrap_or(default_size).min(max_size).max(1);
    (page, page_size)
}

/// GET /api/gallery?page&pageSize&locale&tag
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GalleryParams>,
) -> AppResult<Json<GalleryPage>> {
    let (page, page_size) = paginate(
        params.page,
        params.page_size,
        state.config.api.default_page_size,
        state.config.api.max_page_size,
    );
    let locale = Locale::parse_or_default(params.locale.as_deref().unwrap_or_default());

    let page_data = gallery::list_page(&state.db, locale, params.tag.as_deref(), page, page_size)?;
    Ok(Json(page_data))
}

/// GET /api/gallery/tags?locale
pub async fn tags(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TagParams>,
) -> AppResult<Json<serde_json::Value>> {
    let locale = Locale::parse_or_default(params.locale.as_deref().unwrap_or_default());
    let tags = gallery::list_tags_with_counts(&state.db, locale)?;
    Ok(Json(serde_json::json!({ "tags": tags })))
}
