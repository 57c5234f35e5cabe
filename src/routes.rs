//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET  /feedback`        - Render the feedback form
//! - `POST /feedback`        - Validate and submit feedback
//! - `GET  /feedback/thanks` - Post-submission acknowledgement
//! - `POST /feedback/thanks` - Submission from the thanks-page form
//! - `GET  /health`          - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::handlers::{
    add_feedback_handler, feedback_thanks_handler, get_feedback_handler, health_handler,
};
use crate::middleware;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route(
            "/feedback",
            get(get_feedback_handler).post(add_feedback_handler),
        )
        .route(
            "/feedback/thanks",
            get(feedback_thanks_handler).post(add_feedback_handler),
        )
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(middleware::tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
