use crate::models::MediaRoute;
use crate::services::media;
use crate::web::error::AppResult;
use crate::web::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use std::sync::Arc;

/// GET /api/media/:route: flat `{id, src, type}` list for one route tag.
pub async fn list(
    State(state): State<Arc<AppState>>,
    Path(route): Path<String>,
) -> AppResult<Response> {
    let Ok(route) = route.parse::<MediaRoute>() else {
        let body = serde_json::json!({
            "error": "Not Found",
            "message": "Unknown media route",
        });
        return Ok((StatusCode::NOT_FOUND, Json(body)).into_response());
    };

    let files = media::list_media(&state.db, route)?;
    let entries: Vec<serde_json::Value> = files
        .iter()
        .map(|f| {
            serde_json::json!({
                "id": f.id,
                "src": f.url,
                "type": f.kind,
            })
        })
        .collect();

    Ok(Json(entries).into_response())
}
