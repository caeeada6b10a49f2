//! Error taxonomy for the ExoHabit service.
//!
//! Every variant maps to exactly one HTTP status. Handlers return
//! `Result<_, ExohabitError>` and the `IntoResponse` impl renders the
//! `{status: "error", message}` envelope, so no error ever escapes a
//! request boundary unformatted.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExohabitError {
    /// Client input failed field validation (400).
    #[error("{0}")]
    Validation(String),

    /// Query parameter outside its legal range (400).
    #[error("{0}")]
    ParameterRange(String),

    /// Batch empty or over the admission cap (400).
    #[error("{0}")]
    BatchSize(String),

    /// Model artifact never loaded; permanent until restart (500).
    #[error("Model not loaded")]
    ModelUnavailable,

    /// The model raised during inference (500).
    #[error("Prediction failed: {0}")]
    Prediction(String),

    /// Ranking table never loaded (500).
    #[error("Ranking data not available")]
    RankingUnavailable,

    /// Model artifact is malformed or internally inconsistent.
    #[error("Model artifact error: {0}")]
    Artifact(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ExohabitError>;

impl ExohabitError {
    /// HTTP status for this error class.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ExohabitError::Validation(_)
            | ExohabitError::ParameterRange(_)
            | ExohabitError::BatchSize(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ExohabitError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));
        (self.status_code(), body).into_response()
    }
}
