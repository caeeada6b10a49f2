//! exohabit-model — Model artifact loading and the opaque model abstraction.
//!
//! The prediction service never sees a concrete model technology, only the
//! [`predictor::HabitabilityModel`] trait and the [`schema::FeatureSchema`]
//! that ships inside the artifact.

pub mod artifact;
pub mod logistic;
pub mod predictor;
pub mod schema;

pub use artifact::ModelArtifact;
pub use logistic::LogisticModel;
pub use predictor::{HabitabilityModel, MockModel};
pub use schema::FeatureSchema;
