use super::state::AppState;
use axum::body::Body;
use axum::extract::State;
use axum::http::header::CACHE_CONTROL;
use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

/// Cache-control policy by path class. The edge worker applies the same
/// classification, so origin and edge never disagree. `processed_dir` is
/// the configured variant directory under the media root.
pub fn policy_for_path(processed_dir: &str, path: &str) -> &'static str {
    if path.starts_with("/media/") {
        let marker = format!("/{}/", processed_dir);
        if path.contains(&marker) {
            // Variant URLs carry a content hash, safe to cache forever.
            "public, max-age=31536000, immutable"
        } else {
            "public, max-age=2592000"
        }
    } else if path.starts_with("/api/gallery") {
        "public, max-age=60, stale-while-revalidate=300"
    } else if path.starts_with("/api/") {
        "no-cache"
    } else if path.starts_with("/static/") {
        "public, max-age=2592000"
    } else {
        "no-cache"
    }
}

pub async fn apply_cache_policy(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let policy = policy_for_path(&state.config.media.processed_dir, request.uri().path());
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static(policy));
    response
}
