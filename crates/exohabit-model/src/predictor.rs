//! Trait for habitability model access.
//!
//! Abstracts the serving side away from any concrete model technology. The
//! prediction service only depends on this two-method capability, so the
//! serialized logistic artifact can be swapped for anything that answers the
//! same contract.

use exohabit_common::error::Result;

/// Opaque binary habitability classifier.
///
/// Contract: given a feature vector in the trained column order, return a
/// hard class label and the class-1 probability. Implementations must be
/// safe for unsynchronized concurrent reads; the model is loaded once and
/// never mutated.
pub trait HabitabilityModel: Send + Sync {
    /// Hard class label: true if the planet is predicted habitable.
    fn predict(&self, features: &[f64]) -> Result<bool>;

    /// Class-1 probability in [0, 1].
    fn predict_proba(&self, features: &[f64]) -> Result<f64>;
}

// ── Mock Implementation for Testing ────────────────────────────────────────

/// Mock model returning a fixed probability, or failing on demand.
pub struct MockModel {
    probability: f64,
    threshold: f64,
    fail_message: Option<String>,
}

impl MockModel {
    /// Model that always answers with the given class-1 probability.
    pub fn with_proba(probability: f64) -> Self {
        Self { probability, threshold: 0.5, fail_message: None }
    }

    /// Model whose every call fails with the given message.
    pub fn failing(message: &str) -> Self {
        Self {
            probability: 0.0,
            threshold: 0.5,
            fail_message: Some(message.to_string()),
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

impl HabitabilityModel for MockModel {
    fn predict(&self, features: &[f64]) -> Result<bool> {
        Ok(self.predict_proba(features)? >= self.threshold)
    }

    fn predict_proba(&self, _features: &[f64]) -> Result<f64> {
        if let Some(message) = &self.fail_message {
            return Err(exohabit_common::error::ExohabitError::Prediction(message.clone()));
        }
        Ok(self.probability)
    }
}
