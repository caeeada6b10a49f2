//! exohabit-core — Validation, feature preparation, response formatting,
//! and the prediction/ranking services that sit between raw JSON input and
//! the opaque model.

pub mod features;
pub mod ranking;
pub mod record;
pub mod response;
pub mod service;
pub mod validator;

pub use ranking::{RankingEntry, RankingTable};
pub use record::PlanetRecord;
pub use response::{HabitabilityTier, PredictionResult};
pub use service::{BatchFailure, BatchOutcome, PredictionService};
