//! HTTP handlers for all API routes.

pub mod predict;
pub mod rank;
pub mod system;
