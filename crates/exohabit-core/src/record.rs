//! Raw input record for a single planet.

use serde::{Deserialize, Serialize};

/// One planet as submitted by the client. All fields optional at the type
/// level; the validator decides what is actually required. Constructed per
/// request and discarded after use.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanetRecord {
    /// Display name, not a feature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planet_name: Option<String>,
    /// Orbital period in days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pl_orbper: Option<f64>,
    /// Orbit semi-major axis in AU.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pl_orbsmax: Option<f64>,
    /// Planet mass in Earth masses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pl_bmasse: Option<f64>,
    /// Stellar metallicity [Fe/H] in dex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub st_met: Option<f64>,
    /// Stellar surface gravity, log10(cm/s²).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub st_logg: Option<f64>,
    /// Discovery year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disc_year: Option<i32>,
    /// Stellar spectral type (e.g. "G", "K", "M").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub st_type: Option<String>,
    /// Planet type category (e.g. "rocky", "super_earth").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pl_type: Option<String>,
}

impl PlanetRecord {
    /// Display name falling back to the original API's placeholder.
    pub fn display_name(&self) -> String {
        self.planet_name.clone().unwrap_or_else(|| "Unknown".to_string())
    }

    /// Kepler-442b, the canonical well-formed example. Used by the docs
    /// endpoint and the startup self-test.
    pub fn kepler_442b() -> Self {
        Self {
            planet_name: Some("Kepler-442b".to_string()),
            pl_orbper: Some(112.3),
            pl_orbsmax: Some(0.409),
            pl_bmasse: Some(2.34),
            st_met: Some(0.0),
            st_logg: Some(4.48),
            disc_year: Some(2015),
            st_type: Some("K".to_string()),
            pl_type: Some("super_earth".to_string()),
        }
    }

    /// Proxima Centauri b, second example payload.
    pub fn proxima_centauri_b() -> Self {
        Self {
            planet_name: Some("Proxima Centauri b".to_string()),
            pl_orbper: Some(11.2),
            pl_orbsmax: Some(0.0485),
            pl_bmasse: Some(1.27),
            st_met: Some(0.21),
            st_logg: Some(5.2),
            disc_year: Some(2016),
            st_type: Some("M".to_string()),
            pl_type: Some("rocky".to_string()),
        }
    }
}
