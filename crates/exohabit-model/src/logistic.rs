//! Logistic scorer backed by a loaded artifact.
//!
//! This is the one concrete [`HabitabilityModel`] implementation: optional
//! standardization, a dot product, and a sigmoid. The vector length is
//! checked on every call — a mismatch between preparer output and trained
//! schema must surface as an inference error, never as a silently wrong
//! probability.

use exohabit_common::error::{ExohabitError, Result};
use std::path::Path;
use tracing::info;

use crate::artifact::ModelArtifact;
use crate::predictor::HabitabilityModel;
use crate::schema::FeatureSchema;

pub struct LogisticModel {
    artifact: ModelArtifact,
}

impl LogisticModel {
    pub fn new(artifact: ModelArtifact) -> Result<Self> {
        artifact.validate()?;
        Ok(Self { artifact })
    }

    /// Load from a JSON artifact file.
    pub fn load(path: &Path) -> Result<Self> {
        let artifact = ModelArtifact::load(path)?;
        info!(threshold = artifact.classification_threshold, "Logistic model ready");
        Ok(Self { artifact })
    }

    /// Serving-side schema derived from the artifact.
    pub fn schema(&self) -> FeatureSchema {
        self.artifact.schema()
    }

    fn decision_value(&self, features: &[f64]) -> Result<f64> {
        let expected = self.artifact.feature_names.len();
        if features.len() != expected {
            return Err(ExohabitError::Prediction(format!(
                "feature vector length {} does not match model schema length {expected}",
                features.len()
            )));
        }
        if features.iter().any(|f| !f.is_finite()) {
            return Err(ExohabitError::Prediction(
                "feature vector contains non-finite values".into(),
            ));
        }

        let mut z = self.artifact.intercept;
        match &self.artifact.scaler {
            Some(scaler) => {
                for (i, x) in features.iter().enumerate() {
                    z += self.artifact.coefficients[i] * (x - scaler.mean[i]) / scaler.scale[i];
                }
            }
            None => {
                for (i, x) in features.iter().enumerate() {
                    z += self.artifact.coefficients[i] * x;
                }
            }
        }
        Ok(z)
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl HabitabilityModel for LogisticModel {
    fn predict(&self, features: &[f64]) -> Result<bool> {
        Ok(self.predict_proba(features)? >= self.artifact.classification_threshold)
    }

    fn predict_proba(&self, features: &[f64]) -> Result<f64> {
        let z = self.decision_value(features)?;
        Ok(sigmoid(z).clamp(0.0, 1.0))
    }
}
