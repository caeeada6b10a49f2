//! Input validation for planet records.
//!
//! Fails fast: the first violation produces the single error message the
//! client sees. Pure function, never mutates the record.

use exohabit_common::error::{ExohabitError, Result};
use exohabit_model::FeatureSchema;

use crate::record::PlanetRecord;

/// Required numeric fields and their legal windows.
///
/// Period, semi-major axis, and mass must be strictly positive. Metallicity
/// and surface gravity get broad physical-plausibility windows so obvious
/// unit mistakes are caught without rejecting unusual but real systems.
const NUMERIC_CHECKS: &[(&str, fn(&PlanetRecord) -> Option<f64>, f64, f64)] = &[
    ("pl_orbper", |r| r.pl_orbper, f64::MIN_POSITIVE, 1.0e7),
    ("pl_orbsmax", |r| r.pl_orbsmax, f64::MIN_POSITIVE, 1.0e4),
    ("pl_bmasse", |r| r.pl_bmasse, f64::MIN_POSITIVE, 1.0e5),
    ("st_met", |r| r.st_met, -3.0, 2.0),
    ("st_logg", |r| r.st_logg, 0.0, 8.0),
];

/// Check a raw record for required fields and legal ranges.
/// Categorical membership comes from the schema's encoding tables, so the
/// accepted sets always match what the model was trained with.
pub fn validate(record: &PlanetRecord, schema: &FeatureSchema) -> Result<()> {
    for (name, get, min, max) in NUMERIC_CHECKS {
        let value = match get(record) {
            Some(v) => v,
            None => {
                return Err(ExohabitError::Validation(format!(
                    "Missing required field: {name}"
                )))
            }
        };
        if !value.is_finite() {
            return Err(ExohabitError::Validation(format!(
                "{name} must be a finite number"
            )));
        }
        if value < *min || value > *max {
            if *min == f64::MIN_POSITIVE {
                return Err(ExohabitError::Validation(format!(
                    "{name} must be a positive number"
                )));
            }
            return Err(ExohabitError::Validation(format!(
                "{name} must be between {min} and {max}"
            )));
        }
    }

    check_categorical(schema, "st_type", record.st_type.as_deref())?;
    check_categorical(schema, "pl_type", record.pl_type.as_deref())?;

    Ok(())
}

fn check_categorical(schema: &FeatureSchema, name: &str, value: Option<&str>) -> Result<()> {
    // A categorical field the schema does not encode is not a model input.
    if !schema.is_categorical(name) {
        return Ok(());
    }
    match value {
        Some(v) => {
            if schema.encode(name, v).is_none() {
                let allowed = schema.categories(name).unwrap_or_default().join(", ");
                return Err(ExohabitError::Validation(format!(
                    "{name} must be one of: {allowed}"
                )));
            }
        }
        None => {
            // Absent categorical is only acceptable when the artifact ships
            // a sentinel for it.
            if schema.default_for(name).is_none() {
                return Err(ExohabitError::Validation(format!(
                    "Missing required field: {name}"
                )));
            }
        }
    }
    Ok(())
}
