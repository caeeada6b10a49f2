//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

use crate::handlers::{
    predict::{batch_predict, predict},
    rank::get_ranking,
    system::{examples, health, index, not_found},
};
use crate::state::{AppState, SharedState};

/// Build and return the full axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/predict", post(predict))
        .route("/rank", get(get_ranking))
        .route("/batch_predict", post(batch_predict))
        .route("/examples", get(examples))
        .fallback(not_found)

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
