//! Spreads unanalyzed tracks through a harmonic path

use super::sampler::unit_mix;

/// Insertion point for the `index`-th extra into a sequence of `len` items (0..=len)
pub fn insertion_index(seed: f64, index: usize, len: usize) -> usize {
    ((unit_mix(seed, "interleave", index as u64) * (len + 1) as f64) as usize).min(len)
}

/// Insert each extra, in order, at a seed-derived position of the growing result
pub fn interleave<T>(ordered: Vec<T>, extras: Vec<T>, seed: f64) -> Vec<T> {
    if extras.is_empty() {
        return ordered;
    }
    let mut result = ordered;
    result.reserve(extras.len());
    for (i, extra) in extras.into_iter().enumerate() {
        let at = insertion_index(seed, i, result.len());
        result.insert(at, extra);
    }
    result
}
