//! Coverage gate: decides whether a sampled pool has enough completed
//! analysis to be ordered harmonically

use std::collections::HashMap;
use std::fmt;

use uuid::Uuid;

use crate::models::{DjAnalysisRecord, Track, TrackDjData};

/// Why harmonic ordering was not applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// Harmonic ordering is switched off in configuration
    Disabled,
    /// Only the first page is ordered harmonically
    NotFirstPage,
    /// The sampler returned no tracks
    EmptyPool,
    /// Too few pool tracks have completed analysis
    InsufficientCoverage { completed: usize, pool_size: usize },
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "disabled"),
            Self::NotFirstPage => write!(f, "not_first_page"),
            Self::EmptyPool => write!(f, "empty_pool"),
            Self::InsufficientCoverage {
                completed,
                pool_size,
            } => write!(f, "insufficient_coverage ({}/{})", completed, pool_size),
        }
    }
}

/// Outcome of the coverage gate
#[derive(Debug, Clone, PartialEq)]
pub enum CoverageDecision {
    /// Enough coverage: analyzed tracks with their attributes, plus the rest
    /// of the pool in sampled order
    Harmonic {
        analyzed: Vec<(Track, TrackDjData)>,
        extras: Vec<Track>,
    },
    Fallback(FallbackReason),
}

/// Split a sampled pool by analysis status and apply the coverage threshold.
///
/// A pool is eligible when `completed >= pool_size * min_coverage` and at
/// least one track is analyzed. Records for tracks outside the pool are
/// ignored.
pub fn evaluate(
    pool: Vec<Track>,
    records: Vec<DjAnalysisRecord>,
    min_coverage: f64,
) -> CoverageDecision {
    if pool.is_empty() {
        return CoverageDecision::Fallback(FallbackReason::EmptyPool);
    }

    let mut completed: HashMap<Uuid, TrackDjData> = records
        .into_iter()
        .filter(|r| r.status.is_completed())
        .map(|r| (r.track_id, r.dj_data()))
        .collect();

    let pool_size = pool.len();
    let mut analyzed = Vec::new();
    let mut extras = Vec::new();
    for track in pool {
        match completed.remove(&track.id) {
            Some(data) => analyzed.push((track, data)),
            None => extras.push(track),
        }
    }

    let required = pool_size as f64 * min_coverage;
    if analyzed.is_empty() || (analyzed.len() as f64) < required {
        return CoverageDecision::Fallback(FallbackReason::InsufficientCoverage {
            completed: analyzed.len(),
            pool_size,
        });
    }

    CoverageDecision::Harmonic { analyzed, extras }
}
