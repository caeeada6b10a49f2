//! exohabit-web — HTTP surface for the ExoHabit API.
//! Routes single/batch prediction, the pre-computed ranking lookup, health,
//! and example payloads over axum.

pub mod handlers;
pub mod router;
pub mod state;
