pub mod health;

use std::path::PathBuf;

use axum::{
    routing::{any, get},
    Router,
};
use tower_http::services::ServeDir;

use crate::contact::handlers;
use crate::state::AppState;

/// Builds the API router. When `static_dir` is set, every unmatched path is
/// served from it so the exported page shares an origin with the API.
pub fn build_router(state: AppState, static_dir: Option<PathBuf>) -> Router {
    let router = Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/contact", any(handlers::handle_contact))
        .with_state(state);

    match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    }
}
