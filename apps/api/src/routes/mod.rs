pub mod health;
pub mod pages;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::moods::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML surface
        .route("/", get(pages::show_form).post(pages::submit_form))
        .route("/admin/stats", get(pages::show_stats))
        .route("/static/stats.js", get(pages::serve_stats_js))
        // Mood API
        .route("/api/v1/moods", post(handlers::handle_submit))
        .route("/api/v1/moods/recent", get(handlers::handle_recent))
        .route(
            "/api/v1/moods/:id/review",
            patch(handlers::handle_review),
        )
        .route("/api/v1/stats", get(handlers::handle_stats))
        .with_state(state)
}
