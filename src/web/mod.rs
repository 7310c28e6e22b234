mod cache;
mod error;
mod handlers;
mod routes;
mod state;

pub use cache::policy_for_path;
pub use state::AppState;

use crate::{Config, Database};
use anyhow::Result;
use axum::middleware;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub async fn serve(config: Config, db: Database, addr: &str) -> Result<()> {
    let state = Arc::new(AppState::new(config, db));

    let app = Router::new()
        .merge(routes::api_routes())
        .nest_service("/media", ServeDir::new(&state.media_root))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            cache::apply_cache_policy,
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
