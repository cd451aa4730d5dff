//! Business logic services for Crossfade
//!
//! This module contains:
//! - The DJ-aware shuffle engine
//! - Dependency health checks

pub mod health;
pub mod shuffle;

pub use health::HealthService;
pub use shuffle::{ShuffleService, ShuffleSettings};
