//! exohabit-common — Shared error taxonomy and configuration used across all ExoHabit crates.

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{Config, LimitsConfig, TierConfig};
pub use error::{ExohabitError, Result};
