//! Greedy nearest-neighbour path over analyzed tracks
//!
//! Starting from a seed-chosen track, repeatedly appends the remaining track
//! most compatible with the last one placed. Each candidate carries a small
//! seed-derived jitter so that different seeds break near-ties differently.
//! This is O(n²) in the number of analyzed tracks, which the pool size bounds.

use crate::models::TrackDjData;

use super::compatibility;
use super::sampler::{mix_index, unit_mix};

/// Upper bound of the tie-breaking jitter added to a candidate's score
const JITTER_SCALE: f64 = 0.01;

struct Candidate<T> {
    item: T,
    data: TrackDjData,
    jitter: f64,
}

/// Order `items` so adjacent entries are as compatible as the greedy walk finds.
///
/// Every item is placed exactly once. Zero or one item is returned as-is.
pub fn build_path<T>(items: Vec<(T, TrackDjData)>, seed: f64) -> Vec<T> {
    let n = items.len();
    if n <= 1 {
        return items.into_iter().map(|(item, _)| item).collect();
    }

    let mut remaining: Vec<Candidate<T>> = items
        .into_iter()
        .enumerate()
        .map(|(index, (item, data))| Candidate {
            item,
            data,
            jitter: unit_mix(seed, "path-jitter", index as u64) * JITTER_SCALE,
        })
        .collect();

    let start = ((seed * n as f64) as usize).min(n - 1);
    let first = remaining.remove(start);
    let mut last = first.data;
    let mut ordered = Vec::with_capacity(n);
    ordered.push(first.item);

    let mut step = 0u64;
    while !remaining.is_empty() {
        let pick = if last.is_usable() {
            best_candidate(&last, &remaining)
        } else {
            mix_index(seed, "path-step", step, remaining.len())
        };
        let next = remaining.remove(pick);
        ordered.push(next.item);
        last = next.data;
        step += 1;
    }

    ordered
}

/// Index of the highest jittered score; the earliest candidate wins exact ties
fn best_candidate<T>(last: &TrackDjData, remaining: &[Candidate<T>]) -> usize {
    let mut best = 0;
    let mut best_score = f64::NEG_INFINITY;
    for (i, candidate) in remaining.iter().enumerate() {
        let adjusted = compatibility::score(last, &candidate.data).overall + candidate.jitter;
        if adjusted > best_score {
            best = i;
            best_score = adjusted;
        }
    }
    best
}
