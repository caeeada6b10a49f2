//! Response formatting: (label, probability) → user-facing result.

use exohabit_common::config::TierConfig;
use serde::{Deserialize, Serialize};

/// Categorical habitability tier derived from the class-1 probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitabilityTier {
    High,
    Moderate,
    Low,
    Unlikely,
}

impl HabitabilityTier {
    /// Map a probability onto a tier using the configured cut points.
    pub fn from_probability(probability: f64, tiers: &TierConfig) -> Self {
        if probability >= tiers.high {
            HabitabilityTier::High
        } else if probability >= tiers.moderate {
            HabitabilityTier::Moderate
        } else if probability >= tiers.low {
            HabitabilityTier::Low
        } else {
            HabitabilityTier::Unlikely
        }
    }
}

/// Final per-planet prediction, immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub planet_name: String,
    /// Probability rounded for display.
    pub probability: f64,
    /// Full-precision probability as returned by the model.
    pub probability_raw: f64,
    pub predicted_habitable: bool,
    pub habitability_tier: HabitabilityTier,
}

/// Shape a raw model answer into the response contract.
pub fn format_prediction(
    planet_name: String,
    probability: f64,
    predicted_habitable: bool,
    tiers: &TierConfig,
) -> PredictionResult {
    PredictionResult {
        planet_name,
        probability: round4(probability),
        probability_raw: probability,
        predicted_habitable,
        habitability_tier: HabitabilityTier::from_probability(probability, tiers),
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_cut_points() {
        let tiers = TierConfig::default();
        assert_eq!(HabitabilityTier::from_probability(0.95, &tiers), HabitabilityTier::High);
        assert_eq!(HabitabilityTier::from_probability(0.70, &tiers), HabitabilityTier::High);
        assert_eq!(HabitabilityTier::from_probability(0.69, &tiers), HabitabilityTier::Moderate);
        assert_eq!(HabitabilityTier::from_probability(0.50, &tiers), HabitabilityTier::Moderate);
        assert_eq!(HabitabilityTier::from_probability(0.30, &tiers), HabitabilityTier::Low);
        assert_eq!(HabitabilityTier::from_probability(0.05, &tiers), HabitabilityTier::Unlikely);
    }

    #[test]
    fn test_display_rounding_preserves_raw() {
        let result = format_prediction(
            "Kepler-442b".to_string(),
            0.876_543_21,
            true,
            &TierConfig::default(),
        );
        assert_eq!(result.probability, 0.8765);
        assert_eq!(result.probability_raw, 0.876_543_21);
        assert!(result.predicted_habitable);
        assert_eq!(result.habitability_tier, HabitabilityTier::High);
    }

    #[test]
    fn test_tier_serializes_snake_case() {
        let json = serde_json::to_string(&HabitabilityTier::Unlikely).unwrap();
        assert_eq!(json, r#""unlikely""#);
    }
}
