//! Configuration loading for ExoHabit.
//! Reads exohabit.toml from the current directory or path in EXOHABIT_CONFIG env var.
//!
//! Every field has a serde default so a missing file still yields a usable
//! config; the service is expected to boot (possibly degraded) rather than
//! refuse to start over configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub assets: AssetConfig,
    #[serde(default)]
    pub tiers: TierConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 5000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetConfig {
    #[serde(default = "default_model_path")]
    pub model_path: String,
    #[serde(default = "default_ranking_path")]
    pub ranking_path: String,
}

fn default_model_path() -> String { "models/habitability_model.json".to_string() }
fn default_ranking_path() -> String { "data/habitability_ranking.csv".to_string() }

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            ranking_path: default_ranking_path(),
        }
    }
}

/// Habitability tier cut points on the class-1 probability.
/// `probability >= high` → High, `>= moderate` → Moderate, `>= low` → Low,
/// anything below → Unlikely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierConfig {
    #[serde(default = "default_tier_high")]
    pub high: f64,
    #[serde(default = "default_tier_moderate")]
    pub moderate: f64,
    #[serde(default = "default_tier_low")]
    pub low: f64,
}

fn default_tier_high() -> f64 { 0.70 }
fn default_tier_moderate() -> f64 { 0.50 }
fn default_tier_low() -> f64 { 0.30 }

impl Default for TierConfig {
    fn default() -> Self {
        Self {
            high: default_tier_high(),
            moderate: default_tier_moderate(),
            low: default_tier_low(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Batch admission cap: hard upper bound on records per batch request.
    #[serde(default = "default_max_batch")]
    pub max_batch_size: usize,
    /// Upper bound on `top` for ranking queries.
    #[serde(default = "default_max_rank_top")]
    pub max_rank_top: usize,
}

fn default_max_batch() -> usize { 100 }
fn default_max_rank_top() -> usize { 100 }

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_batch_size: default_max_batch(),
            max_rank_top: default_max_rank_top(),
        }
    }
}

impl Config {
    /// Load configuration from exohabit.toml.
    /// Checks EXOHABIT_CONFIG env var first, then the current directory.
    /// A missing file yields the built-in defaults; a malformed file is an error.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("EXOHABIT_CONFIG")
            .unwrap_or_else(|_| "exohabit.toml".to_string());

        if !Path::new(&path).exists() {
            tracing::info!(path = %path, "No config file found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
