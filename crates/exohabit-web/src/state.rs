//! Shared application state for the web server.
//!
//! Both assets are loaded exactly once at startup and never reloaded. A
//! failed load leaves its slot `None` and the service answers degraded until
//! restart; it never refuses to boot.

use std::path::Path;
use std::sync::Arc;

use exohabit_common::config::{Config, LimitsConfig};
use exohabit_core::{PredictionService, RankingTable};
use exohabit_model::LogisticModel;
use tracing::{info, warn};

/// Shared state injected into every axum handler.
pub struct AppState {
    /// Prediction pipeline; `None` when the model artifact failed to load.
    pub prediction: Option<PredictionService>,
    /// Ranking table; `None` when the CSV failed to load.
    pub ranking: Option<RankingTable>,
    pub limits: LimitsConfig,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    /// Build the process-wide context: attempt both asset loads
    /// independently, log failures, run the model self-test.
    pub fn from_config(config: &Config) -> Self {
        let prediction = match LogisticModel::load(Path::new(&config.assets.model_path)) {
            Ok(model) => {
                let schema = model.schema();
                match PredictionService::new(
                    Arc::new(model),
                    schema,
                    config.tiers.clone(),
                    &config.limits,
                ) {
                    Ok(service) => {
                        service.self_check();
                        Some(service)
                    }
                    Err(err) => {
                        warn!(error = %err, "Model loaded but schema is unusable");
                        None
                    }
                }
            }
            Err(err) => {
                warn!(
                    path = %config.assets.model_path,
                    error = %err,
                    "Failed to load model artifact, predictions disabled"
                );
                None
            }
        };

        let ranking = match RankingTable::load(Path::new(&config.assets.ranking_path)) {
            Ok(table) => Some(table),
            Err(err) => {
                warn!(
                    path = %config.assets.ranking_path,
                    error = %err,
                    "Failed to load ranking table, rankings disabled"
                );
                None
            }
        };

        if prediction.is_some() && ranking.is_some() {
            info!("Startup assets loaded, service healthy");
        }

        Self {
            prediction,
            ranking,
            limits: config.limits.clone(),
        }
    }
}
