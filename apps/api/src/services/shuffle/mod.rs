//! DJ-aware shuffle engine
//!
//! Orders a page of the catalog the way a DJ might mix it:
//! - `sampler`: seeded permutation of the whole catalog, sliced into pages
//! - `coverage`: decides whether enough of the sampled pool is analyzed
//! - `compatibility`: key, tempo, energy and danceability scoring
//! - `path`: greedy chain over the analyzed tracks
//! - `interleave`: spreads unanalyzed tracks through the chain
//! - `service`: the request entry point tying these together
//!
//! Every step is a pure function of the seed and a read-only snapshot of the
//! catalog, so the same request always yields the same page.

pub mod catalog;
pub mod compatibility;
pub mod coverage;
pub mod interleave;
pub mod path;
pub mod request;
pub mod sampler;
pub mod service;

#[cfg(test)]
pub(crate) mod fixtures;

pub use catalog::{DjAnalysisStore, MemoryCatalog, TrackCatalog};
pub use compatibility::{CompatibilityResult, KeyRelation};
pub use coverage::{CoverageDecision, FallbackReason};
pub use request::{ShufflePage, ShuffleRequest, ShuffleResult, DEFAULT_TAKE, MAX_TAKE};
pub use service::{ShuffleService, ShuffleSettings};
