//! Prediction orchestration: validator → preparer → model → formatter.

use std::sync::Arc;

use exohabit_common::config::{LimitsConfig, TierConfig};
use exohabit_common::error::{ExohabitError, Result};
use exohabit_model::{FeatureSchema, HabitabilityModel};
use serde::Serialize;
use tracing::{info, warn};

use crate::features;
use crate::record::PlanetRecord;
use crate::response::{format_prediction, PredictionResult};
use crate::validator;

/// Per-record failure inside a batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchFailure {
    pub planet_name: String,
    pub error: String,
}

/// Batch result: successes and failures in their respective input orders.
#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    pub results: Vec<PredictionResult>,
    pub errors: Vec<BatchFailure>,
}

/// Stateless prediction pipeline over a shared, immutable model.
#[derive(Clone)]
pub struct PredictionService {
    model: Arc<dyn HabitabilityModel>,
    schema: FeatureSchema,
    tiers: TierConfig,
    max_batch_size: usize,
}

impl PredictionService {
    /// Wire a loaded model and its schema into the pipeline. Rejects
    /// artifacts naming features this build cannot extract, so schema drift
    /// fails at startup.
    pub fn new(
        model: Arc<dyn HabitabilityModel>,
        schema: FeatureSchema,
        tiers: TierConfig,
        limits: &LimitsConfig,
    ) -> Result<Self> {
        features::check_schema_supported(&schema)?;
        Ok(Self {
            model,
            schema,
            tiers,
            max_batch_size: limits.max_batch_size,
        })
    }

    /// Predict habitability for a single validated record.
    pub fn predict_one(&self, record: &PlanetRecord) -> Result<PredictionResult> {
        validator::validate(record, &self.schema)?;
        let vector = features::prepare(record, &self.schema);

        let probability = self.run_model(|m| m.predict_proba(&vector))?;
        let predicted = self.run_model(|m| m.predict(&vector))?;

        Ok(format_prediction(
            record.display_name(),
            probability,
            predicted,
            &self.tiers,
        ))
    }

    /// Predict for up to `max_batch_size` records. One bad record never
    /// aborts the batch; its error is collected and the batch continues.
    pub fn predict_batch(&self, records: &[PlanetRecord]) -> Result<BatchOutcome> {
        if records.is_empty() {
            return Err(ExohabitError::BatchSize("No planets provided".into()));
        }
        if records.len() > self.max_batch_size {
            return Err(ExohabitError::BatchSize(format!(
                "Maximum {} planets per batch",
                self.max_batch_size
            )));
        }

        let mut results = Vec::new();
        let mut errors = Vec::new();
        for record in records {
            match self.predict_one(record) {
                Ok(result) => results.push(result),
                Err(err) => errors.push(BatchFailure {
                    planet_name: record.display_name(),
                    error: err.to_string(),
                }),
            }
        }

        Ok(BatchOutcome { results, errors })
    }

    /// Startup self-test: predict on a known example and check the output is
    /// a sane probability. Catches artifact/preparer drift early without
    /// asserting exact values from the training run.
    pub fn self_check(&self) {
        match self.predict_one(&PlanetRecord::kepler_442b()) {
            Ok(result) if (0.0..=1.0).contains(&result.probability_raw) => {
                info!(
                    probability = result.probability_raw,
                    predicted_habitable = result.predicted_habitable,
                    "Model self-test passed"
                );
            }
            Ok(result) => {
                warn!(
                    probability = result.probability_raw,
                    "Model self-test produced an out-of-range probability; schema drift likely"
                );
            }
            Err(err) => {
                warn!(error = %err, "Model self-test failed; predictions may be degraded");
            }
        }
    }

    // Any non-taxonomy error coming out of the opaque model is reported as a
    // prediction failure.
    fn run_model<T>(
        &self,
        call: impl FnOnce(&dyn HabitabilityModel) -> Result<T>,
    ) -> Result<T> {
        call(self.model.as_ref()).map_err(|err| match err {
            ExohabitError::Prediction(_) => err,
            other => ExohabitError::Prediction(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exohabit_model::MockModel;
    use std::collections::HashMap;

    fn schema() -> FeatureSchema {
        let encodings = HashMap::from([
            (
                "st_type".to_string(),
                HashMap::from([
                    ("G".to_string(), 4.0),
                    ("K".to_string(), 5.0),
                    ("M".to_string(), 6.0),
                ]),
            ),
            (
                "pl_type".to_string(),
                HashMap::from([
                    ("rocky".to_string(), 0.0),
                    ("super_earth".to_string(), 1.0),
                ]),
            ),
        ]);
        FeatureSchema::new(
            vec![
                "pl_orbper".to_string(),
                "pl_orbsmax".to_string(),
                "pl_bmasse".to_string(),
                "st_met".to_string(),
                "st_logg".to_string(),
                "disc_year".to_string(),
                "st_type".to_string(),
                "pl_type".to_string(),
            ],
            encodings,
            HashMap::from([("disc_year".to_string(), 0.0)]),
        )
    }

    fn service(model: MockModel) -> PredictionService {
        PredictionService::new(
            Arc::new(model),
            schema(),
            TierConfig::default(),
            &LimitsConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_predict_one_example() {
        let svc = service(MockModel::with_proba(0.82));
        let result = svc.predict_one(&PlanetRecord::kepler_442b()).unwrap();
        assert_eq!(result.planet_name, "Kepler-442b");
        assert!((0.0..=1.0).contains(&result.probability));
        assert!(result.predicted_habitable);
    }

    #[test]
    fn test_invalid_record_never_reaches_model() {
        // A failing model proves validation short-circuits before inference.
        let svc = service(MockModel::failing("must not be called"));
        let mut record = PlanetRecord::kepler_442b();
        record.pl_orbper = None;
        let err = svc.predict_one(&record).unwrap_err();
        assert!(matches!(err, ExohabitError::Validation(_)));
    }

    #[test]
    fn test_model_failure_is_prediction_error() {
        let svc = service(MockModel::failing("backend exploded"));
        let err = svc.predict_one(&PlanetRecord::kepler_442b()).unwrap_err();
        assert!(matches!(err, ExohabitError::Prediction(_)));
        assert!(err.to_string().contains("backend exploded"));
    }

    #[test]
    fn test_empty_batch_rejected() {
        let svc = service(MockModel::with_proba(0.5));
        let err = svc.predict_batch(&[]).unwrap_err();
        assert!(matches!(err, ExohabitError::BatchSize(_)));
    }

    #[test]
    fn test_oversized_batch_rejected() {
        let svc = service(MockModel::with_proba(0.5));
        let records = vec![PlanetRecord::kepler_442b(); 101];
        let err = svc.predict_batch(&records).unwrap_err();
        assert_eq!(err.to_string(), "Maximum 100 planets per batch");
    }

    #[test]
    fn test_full_batch_at_cap() {
        let svc = service(MockModel::with_proba(0.9));
        let records = vec![PlanetRecord::kepler_442b(); 100];
        let outcome = svc.predict_batch(&records).unwrap();
        assert_eq!(outcome.results.len(), 100);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn test_mixed_batch_isolates_failures() {
        let svc = service(MockModel::with_proba(0.7));
        let mut bad = PlanetRecord::proxima_centauri_b();
        bad.planet_name = Some("Broken-1".to_string());
        bad.st_logg = None;
        let records = vec![
            PlanetRecord::kepler_442b(),
            bad,
            PlanetRecord::proxima_centauri_b(),
        ];
        let outcome = svc.predict_batch(&records).unwrap();
        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].planet_name, "Broken-1");
        assert_eq!(outcome.errors[0].error, "Missing required field: st_logg");
        // Successes keep input order.
        assert_eq!(outcome.results[0].planet_name, "Kepler-442b");
        assert_eq!(outcome.results[1].planet_name, "Proxima Centauri b");
    }

    #[test]
    fn test_unsupported_schema_rejected_at_construction() {
        let bad_schema = FeatureSchema::new(
            vec!["pl_radius".to_string()],
            HashMap::new(),
            HashMap::new(),
        );
        let result = PredictionService::new(
            Arc::new(MockModel::with_proba(0.5)),
            bad_schema,
            TierConfig::default(),
            &LimitsConfig::default(),
        );
        assert!(result.is_err());
    }
}
