//! API index, health check, example payloads, and the 404 fallback.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use exohabit_core::PlanetRecord;

use crate::state::SharedState;

/// GET / — API documentation index.
pub async fn index() -> impl IntoResponse {
    Json(json!({
        "name": "ExoHabit API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/health": "GET - Health check",
            "/predict": "POST - Single planet prediction",
            "/rank": "GET - Get ranked candidates",
            "/batch_predict": "POST - Batch predictions (max 100)",
            "/examples": "GET - Example payloads",
        },
    }))
}

/// GET /health — Report load status of both startup assets. Never errors.
pub async fn health(State(state): State<SharedState>) -> impl IntoResponse {
    let model_loaded = state.prediction.is_some();
    let ranking_loaded = state.ranking.is_some();
    Json(json!({
        "status": if model_loaded { "healthy" } else { "degraded" },
        "model_loaded": model_loaded,
        "ranking_loaded": ranking_loaded,
    }))
}

/// GET /examples — Static example input payloads.
pub async fn examples() -> impl IntoResponse {
    Json(json!({
        "examples": [
            PlanetRecord::kepler_442b(),
            PlanetRecord::proxima_centauri_b(),
        ],
    }))
}

/// Fallback for unmatched routes.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"status": "error", "message": "Endpoint not found"})),
    )
}
