//! Shuffle request normalization and result shape

use serde::{Deserialize, Serialize};

use crate::models::TrackListItem;

/// Page size when the request does not give one
pub const DEFAULT_TAKE: i64 = 50;

/// Maximum tracks per shuffle page
pub const MAX_TAKE: i64 = 100;

/// Clamp page size to `1..=MAX_TAKE`
#[inline]
pub fn clamp_take(take: i64) -> i64 {
    take.clamp(1, MAX_TAKE)
}

/// Clamp offset to non-negative
#[inline]
pub fn clamp_skip(skip: i64) -> i64 {
    skip.max(0)
}

/// Bring a seed into `[0, 1)`; non-finite or missing seeds are regenerated
pub fn normalize_seed(seed: Option<f64>) -> f64 {
    match seed.filter(|s| s.is_finite()) {
        Some(s) => {
            let folded = s.rem_euclid(1.0);
            // rem_euclid can round up to exactly 1.0 for tiny negative inputs
            if folded >= 1.0 {
                0.0
            } else {
                folded
            }
        }
        None => rand::random::<f64>(),
    }
}

/// Raw shuffle request, as received from a caller
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShuffleRequest {
    pub seed: Option<f64>,
    pub skip: Option<i64>,
    pub take: Option<i64>,
}

impl ShuffleRequest {
    pub fn normalize(&self) -> ShufflePage {
        ShufflePage {
            seed: normalize_seed(self.seed),
            skip: clamp_skip(self.skip.unwrap_or(0)),
            take: clamp_take(self.take.unwrap_or(DEFAULT_TAKE)),
        }
    }
}

/// Request after clamping; these are the values echoed back to the caller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShufflePage {
    pub seed: f64,
    pub skip: i64,
    pub take: i64,
}

/// One page of shuffled tracks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShuffleResult {
    pub data: Vec<TrackListItem>,
    pub total: i64,
    pub seed: f64,
    pub skip: i64,
    pub take: i64,
    pub has_more: bool,
    pub dj_mode: bool,
}
