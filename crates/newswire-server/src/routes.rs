use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Ingest endpoint
        .route("/api/news/raw", post(handlers::ingest_news))
        // Feed endpoint
        .route("/api/feed", get(handlers::get_feed))
        // Admin endpoints
        .route("/api/admin/delete/{id}", delete(handlers::delete_post))
        .route("/api/admin/edit/{id}", put(handlers::edit_post))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
