//! Serialized model artifact format.
//!
//! The artifact is a JSON document produced by the training pipeline (out of
//! scope here). It bundles everything the serving side must agree with the
//! trained model on: feature order, categorical encoding tables, sentinel
//! defaults, and the classifier parameters themselves. Loading validates
//! internal consistency so a drifted or truncated artifact fails at startup,
//! not silently at inference time.

use exohabit_common::error::{ExohabitError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use crate::schema::FeatureSchema;

fn default_threshold() -> f64 { 0.5 }

/// Optional standardization applied elementwise before the linear term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// On-disk model artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub schema_version: u32,
    /// ISO-8601 timestamp written by the training run, informational only.
    #[serde(default)]
    pub trained_at: Option<String>,
    /// Feature names in trained column order.
    pub feature_names: Vec<String>,
    /// One coefficient per feature, same order as `feature_names`.
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub scaler: Option<Scaler>,
    /// Class-1 decision threshold for the hard label.
    #[serde(default = "default_threshold")]
    pub classification_threshold: f64,
    /// Categorical feature → (category label → numeric code).
    #[serde(default)]
    pub encodings: HashMap<String, HashMap<String, f64>>,
    /// Sentinel substitutions for optional input fields.
    #[serde(default)]
    pub defaults: HashMap<String, f64>,
}

impl ModelArtifact {
    /// Load and validate an artifact from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ExohabitError::Artifact(format!(
                "artifact file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let artifact: ModelArtifact = serde_json::from_str(&content)?;
        artifact.validate()?;

        info!(
            path = %path.display(),
            n_features = artifact.feature_names.len(),
            schema_version = artifact.schema_version,
            "Loaded model artifact"
        );
        Ok(artifact)
    }

    /// Internal consistency checks.
    pub fn validate(&self) -> Result<()> {
        if self.feature_names.is_empty() {
            return Err(ExohabitError::Artifact("feature_names is empty".into()));
        }

        if self.coefficients.len() != self.feature_names.len() {
            return Err(ExohabitError::Artifact(format!(
                "{} coefficients for {} features",
                self.coefficients.len(),
                self.feature_names.len()
            )));
        }

        if let Some(scaler) = &self.scaler {
            if scaler.mean.len() != self.feature_names.len()
                || scaler.scale.len() != self.feature_names.len()
            {
                return Err(ExohabitError::Artifact(
                    "scaler dimensions do not match feature count".into(),
                ));
            }
            if scaler.scale.iter().any(|s| *s == 0.0 || !s.is_finite()) {
                return Err(ExohabitError::Artifact(
                    "scaler contains zero or non-finite scale values".into(),
                ));
            }
        }

        for feature in self.encodings.keys() {
            if !self.feature_names.contains(feature) {
                return Err(ExohabitError::Artifact(format!(
                    "encoding table for unknown feature '{feature}'"
                )));
            }
        }
        for table in self.encodings.values() {
            if table.is_empty() {
                return Err(ExohabitError::Artifact("empty categorical encoding table".into()));
            }
        }

        for feature in self.defaults.keys() {
            if !self.feature_names.contains(feature) {
                return Err(ExohabitError::Artifact(format!(
                    "default value for unknown feature '{feature}'"
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.classification_threshold) {
            return Err(ExohabitError::Artifact(format!(
                "classification threshold {} outside [0, 1]",
                self.classification_threshold
            )));
        }

        Ok(())
    }

    /// The serving-side view of the artifact: order, encodings, defaults.
    pub fn schema(&self) -> FeatureSchema {
        FeatureSchema::new(
            self.feature_names.clone(),
            self.encodings.clone(),
            self.defaults.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact_json() -> &'static str {
        r#"{
            "schema_version": 1,
            "feature_names": ["pl_orbper", "pl_bmasse", "st_type"],
            "coefficients": [0.01, -0.2, 0.1],
            "intercept": -0.5,
            "encodings": {
                "st_type": {"G": 4.0, "K": 5.0, "M": 6.0}
            },
            "defaults": {"pl_bmasse": 1.0}
        }"#
    }

    #[test]
    fn test_parse_and_validate() {
        let artifact: ModelArtifact = serde_json::from_str(artifact_json()).unwrap();
        assert!(artifact.validate().is_ok());
        assert_eq!(artifact.classification_threshold, 0.5);
        assert_eq!(artifact.schema().len(), 3);
        assert!(artifact.schema().is_categorical("st_type"));
    }

    #[test]
    fn test_coefficient_mismatch_rejected() {
        let mut artifact: ModelArtifact = serde_json::from_str(artifact_json()).unwrap();
        artifact.coefficients.pop();
        let err = artifact.validate().unwrap_err();
        assert!(err.to_string().contains("2 coefficients for 3 features"));
    }

    #[test]
    fn test_encoding_for_unknown_feature_rejected() {
        let mut artifact: ModelArtifact = serde_json::from_str(artifact_json()).unwrap();
        artifact
            .encodings
            .insert("st_teff".to_string(), HashMap::from([("hot".to_string(), 1.0)]));
        assert!(artifact.validate().is_err());
    }

    #[test]
    fn test_bad_scaler_rejected() {
        let mut artifact: ModelArtifact = serde_json::from_str(artifact_json()).unwrap();
        artifact.scaler = Some(Scaler {
            mean: vec![0.0, 0.0, 0.0],
            scale: vec![1.0, 0.0, 1.0],
        });
        assert!(artifact.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_artifact_error() {
        let err = ModelArtifact::load(Path::new("models/does_not_exist.json")).unwrap_err();
        assert!(matches!(err, ExohabitError::Artifact(_)));
    }
}
