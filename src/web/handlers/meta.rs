use crate::models::Locale;
use crate::web::error::AppResult;
use crate::web::state::AppState;
use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct MetaParams {
    pub locale: Option<String>,
}

/// GET /api/meta?locale: SEO metadata for one locale. Unsupported codes
/// and missing locale sections fall back to the Polish defaults, then to
/// the `[site]` block.
pub async fn site_meta(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MetaParams>,
) -> AppResult<Json<serde_json::Value>> {
    let locale = Locale::parse_or_default(params.locale.as_deref().unwrap_or_default());
    let site = &state.config.site;

    let body = match state.config.seo.for_locale(locale) {
        Some(meta) => serde_json::json!({
            "locale": locale,
            "title": meta.title,
            "description": meta.description,
            "ogImage": meta.og_image,
            "url": site.url,
        }),
        None => serde_json::json!({
            "locale": locale,
            "title": site.title,
            "description": site.description,
            "ogImage": null,
            "url": site.url,
        }),
    };

    Ok(Json(body))
}
