//! Database repository layer for Crossfade
//!
//! Repositories hold a connection pool and return `sqlx::Error`; the shuffle
//! engine reaches them through its catalog traits.

pub mod dj_analysis;
pub mod track;
pub mod utils;

pub use dj_analysis::DjAnalysisRepository;
pub use track::TrackRepository;
