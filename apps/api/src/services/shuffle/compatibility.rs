//! Track-to-track compatibility scoring for harmonic mixing
//!
//! Compares the DJ attributes of two tracks on four axes:
//! - Key: relationship on the Camelot wheel
//! - Tempo: BPM closeness, allowing half/double-time alignment
//! - Energy and danceability: level similarity
//!
//! Each axis yields a score in `0.0..=1.0`. The overall score is the weighted
//! mean over the axes both tracks carry, so a missing attribute neither helps
//! nor punishes a pair. Scoring is symmetric and pure.

use serde::Serialize;

use crate::models::{CamelotKey, DjAxis, TrackDjData};

/// Axis weights for the overall score
const WEIGHT_KEY: f64 = 0.40;
const WEIGHT_BPM: f64 = 0.30;
const WEIGHT_ENERGY: f64 = 0.20;
const WEIGHT_DANCEABILITY: f64 = 0.10;

/// Score multiplier for tempos that only line up at half/double time
const HALF_DOUBLE_TIME_FACTOR: f64 = 0.9;

/// Relative tempo difference bands (fraction of the faster tempo) and their scores
const BPM_BANDS: [(f64, f64); 4] = [(0.02, 1.0), (0.04, 0.8), (0.06, 0.5), (0.08, 0.3)];
const BPM_OUTSIDE_BANDS: f64 = 0.1;

/// How two keys relate on the Camelot wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyRelation {
    /// Identical key
    Same,
    /// One step around the wheel in the same mode (energy boost/drop)
    Adjacent,
    /// Relative major/minor (same number, other ring)
    Relative,
    /// Two steps around the wheel in the same mode
    TwoStep,
    /// One step around the wheel with a mode change
    Diagonal,
    /// Anything further away
    Clash,
}

impl KeyRelation {
    /// Classify the relationship between two keys
    pub fn between(a: CamelotKey, b: CamelotKey) -> Self {
        let steps = a.clockwise_steps(&b);
        let same_mode = a.mode() == b.mode();
        match (steps, same_mode) {
            (0, true) => Self::Same,
            (0, false) => Self::Relative,
            (1 | 11, true) => Self::Adjacent,
            (2 | 10, true) => Self::TwoStep,
            (1 | 11, false) => Self::Diagonal,
            _ => Self::Clash,
        }
    }

    pub fn score(&self) -> f64 {
        match self {
            Self::Same => 1.0,
            Self::Adjacent => 0.9,
            Self::Relative => 0.8,
            Self::TwoStep => 0.5,
            Self::Diagonal => 0.4,
            Self::Clash => 0.1,
        }
    }
}

/// Result of comparing two tracks
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityResult {
    /// Weighted score over the comparable axes (0.0 - 1.0)
    pub overall: f64,
    pub key: Option<f64>,
    pub key_relation: Option<KeyRelation>,
    pub bpm: Option<f64>,
    pub energy: Option<f64>,
    pub danceability: Option<f64>,
}

impl CompatibilityResult {
    /// Sub-score for one axis, if both tracks carry it
    pub fn axis(&self, axis: DjAxis) -> Option<f64> {
        match axis {
            DjAxis::Key => self.key,
            DjAxis::Bpm => self.bpm,
            DjAxis::Energy => self.energy,
            DjAxis::Danceability => self.danceability,
        }
    }
}

fn axis_weight(axis: DjAxis) -> f64 {
    match axis {
        DjAxis::Key => WEIGHT_KEY,
        DjAxis::Bpm => WEIGHT_BPM,
        DjAxis::Energy => WEIGHT_ENERGY,
        DjAxis::Danceability => WEIGHT_DANCEABILITY,
    }
}

/// Compare two tracks' DJ attributes
pub fn score(a: &TrackDjData, b: &TrackDjData) -> CompatibilityResult {
    let key_relation = match (a.camelot(), b.camelot()) {
        (Some(ka), Some(kb)) => Some(KeyRelation::between(ka, kb)),
        _ => None,
    };
    let bpm = match (a.tempo(), b.tempo()) {
        (Some(x), Some(y)) => Some(bpm_score(x, y)),
        _ => None,
    };
    let energy = match (a.energy_level(), b.energy_level()) {
        (Some(x), Some(y)) => Some(level_similarity(x, y)),
        _ => None,
    };
    let danceability = match (a.danceability_level(), b.danceability_level()) {
        (Some(x), Some(y)) => Some(level_similarity(x, y)),
        _ => None,
    };

    let mut result = CompatibilityResult {
        overall: 0.0,
        key: key_relation.map(|r| r.score()),
        key_relation,
        bpm,
        energy,
        danceability,
    };

    let (weighted, total_weight) = DjAxis::ALL
        .iter()
        .filter_map(|axis| result.axis(*axis).map(|s| (s, axis_weight(*axis))))
        .fold((0.0, 0.0), |(sum, weights), (s, w)| (sum + s * w, weights + w));

    if total_weight > 0.0 {
        result.overall = (weighted / total_weight).clamp(0.0, 1.0);
    }
    result
}

/// Tempo compatibility, trying straight, half-time and double-time alignment
pub fn bpm_score(a: f64, b: f64) -> f64 {
    [
        (a, b, 1.0),
        (a * 2.0, b, HALF_DOUBLE_TIME_FACTOR),
        (a, b * 2.0, HALF_DOUBLE_TIME_FACTOR),
    ]
    .iter()
    .map(|&(x, y, factor)| band_score((x - y).abs() / x.max(y)) * factor)
    .fold(0.0, f64::max)
}

fn band_score(relative_delta: f64) -> f64 {
    BPM_BANDS
        .iter()
        .find(|(limit, _)| relative_delta <= *limit)
        .map(|(_, s)| *s)
        .unwrap_or(BPM_OUTSIDE_BANDS)
}

fn level_similarity(a: f64, b: f64) -> f64 {
    (1.0 - (a - b).abs()).clamp(0.0, 1.0)
}
