use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Recommendations
        .route("/recommend", post(handlers::recommend))
        // Frontend entry point
        .route_service("/", ServeFile::new("static/index.html"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
