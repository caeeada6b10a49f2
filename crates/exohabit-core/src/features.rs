//! Feature preparation: validated record → fixed-order numeric vector.
//!
//! The artifact's `feature_names` list drives the walk, so the output length
//! and order always match whatever the loaded model was trained with.
//! Callers must validate first; `prepare` substitutes sentinels for gaps
//! rather than re-checking.

use exohabit_common::error::{ExohabitError, Result};
use exohabit_model::FeatureSchema;

use crate::record::PlanetRecord;

/// Input fields this serving build knows how to extract.
const SUPPORTED_FEATURES: &[&str] = &[
    "pl_orbper",
    "pl_orbsmax",
    "pl_bmasse",
    "st_met",
    "st_logg",
    "disc_year",
    "st_type",
    "pl_type",
];

/// Reject an artifact whose schema names a feature this build cannot
/// extract. Run once at service construction so drift surfaces at startup,
/// not per request.
pub fn check_schema_supported(schema: &FeatureSchema) -> Result<()> {
    for name in schema.feature_names() {
        if !SUPPORTED_FEATURES.contains(&name.as_str()) {
            return Err(ExohabitError::Artifact(format!(
                "model schema names unsupported feature '{name}'"
            )));
        }
    }
    Ok(())
}

/// Assemble the model's feature vector in trained column order.
///
/// Assumes the record already passed [`crate::validator::validate`]; on an
/// unvalidated record missing fields silently become sentinels, which is
/// exactly the corruption the validator exists to prevent.
pub fn prepare(record: &PlanetRecord, schema: &FeatureSchema) -> Vec<f64> {
    schema
        .feature_names()
        .iter()
        .map(|name| extract(record, schema, name))
        .collect()
}

fn extract(record: &PlanetRecord, schema: &FeatureSchema, name: &str) -> f64 {
    let raw = match name {
        "pl_orbper" => record.pl_orbper,
        "pl_orbsmax" => record.pl_orbsmax,
        "pl_bmasse" => record.pl_bmasse,
        "st_met" => record.st_met,
        "st_logg" => record.st_logg,
        "disc_year" => record.disc_year.map(|y| y as f64),
        "st_type" => record
            .st_type
            .as_deref()
            .and_then(|v| schema.encode(name, v)),
        "pl_type" => record
            .pl_type
            .as_deref()
            .and_then(|v| schema.encode(name, v)),
        _ => None,
    };
    raw.or_else(|| schema.default_for(name)).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn schema() -> FeatureSchema {
        let encodings = HashMap::from([
            (
                "st_type".to_string(),
                HashMap::from([("K".to_string(), 5.0), ("M".to_string(), 6.0)]),
            ),
            (
                "pl_type".to_string(),
                HashMap::from([("rocky".to_string(), 0.0), ("super_earth".to_string(), 1.0)]),
            ),
        ]);
        let defaults = HashMap::from([("disc_year".to_string(), 0.0)]);
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
            defaults,
        )
    }

    #[test]
    fn test_vector_matches_schema_order() {
        let vector = prepare(&PlanetRecord::kepler_442b(), &schema());
        assert_eq!(vector.len(), schema().len());
        assert_eq!(
            vector,
            vec![112.3, 0.409, 2.34, 0.0, 4.48, 2015.0, 5.0, 1.0]
        );
    }

    #[test]
    fn test_missing_disc_year_uses_sentinel() {
        let mut record = PlanetRecord::kepler_442b();
        record.disc_year = None;
        let vector = prepare(&record, &schema());
        assert_eq!(vector[5], 0.0);
    }

    #[test]
    fn test_order_follows_artifact_not_code() {
        // Reversed schema order must reverse the vector.
        let reversed = FeatureSchema::new(
            vec!["st_logg".to_string(), "pl_orbper".to_string()],
            HashMap::new(),
            HashMap::new(),
        );
        let vector = prepare(&PlanetRecord::kepler_442b(), &reversed);
        assert_eq!(vector, vec![4.48, 112.3]);
    }

    #[test]
    fn test_unsupported_schema_feature_rejected() {
        let bad = FeatureSchema::new(
            vec!["pl_orbper".to_string(), "st_teff".to_string()],
            HashMap::new(),
            HashMap::new(),
        );
        let err = check_schema_supported(&bad).unwrap_err();
        assert!(err.to_string().contains("st_teff"));
        assert!(check_schema_supported(&schema()).is_ok());
    }
}
