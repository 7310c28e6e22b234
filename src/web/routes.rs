use super::handlers;
use super::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/gallery", get(handlers::gallery::list))
        .route("/api/gallery/tags", get(handlers::gallery::tags))
        .route("/api/media/:route", get(handlers::media::list))
        .route("/api/blog", get(handlers::blog::list))
        .route("/api/meta", get(handlers::meta::site_meta))
        .route("/api/inquiries", post(handlers::inquiry::create))
        .route("/health", get(health))
}

async fn health() -> &'static str {
    "ok"
}
