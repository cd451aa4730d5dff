//! HTTP route handlers for the Crossfade API
//!
//! - Shuffle endpoint under `/tracks`
//! - Health check endpoints under `/health`

pub mod health;
pub mod shuffle;

pub use health::{health_router, HealthState};
pub use shuffle::{shuffle_router, ShuffleState};
