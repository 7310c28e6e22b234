use crate::models::CreateInquiry;
use crate::services::inquiry;
use crate::web::error::AppResult;
use crate::web::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use std::sync::Arc;

/// POST /api/inquiries: contact-form submission.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CreateInquiry>,
) -> AppResult<Response> {
    if let Err(msg) = inquiry::validate(&input) {
        let body = serde_json::json!({
            "error": "Bad Request",
            "message": msg,
        });
        return Ok((StatusCode::BAD_REQUEST, Json(body)).into_response());
    }

    let created = inquiry::create_inquiry(&state.db, input)?;
    Ok((StatusCode::CREATED, Json(created)).into_response())
}
