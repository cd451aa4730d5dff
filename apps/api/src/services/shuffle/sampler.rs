//! Seeded sampling primitives
//!
//! A seed in `[0, 1)` defines one total permutation of the catalog: every
//! track gets the sort key `sha256("{seed}:{track_id}")` and pages are slices
//! of the catalog sorted by that key (track id breaks the practically
//! impossible digest tie). The SQL sampler in `TrackRepository` computes the
//! same digest with PostgreSQL's `sha256()`, so in-memory and database
//! catalogs agree on the permutation for a given seed.
//!
//! The same digest family also drives every other seed-derived choice in the
//! engine through [`unit_mix`], so a fixed seed always reproduces the same
//! ordering without carrying any RNG state between calls.

use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::models::Track;

/// Text form of the seed shared by the Rust and SQL samplers.
///
/// `f64`'s `Display` is the shortest string that round-trips, so a seed echoed
/// back to a client and sent again yields the same salt.
pub fn seed_salt(seed: f64) -> String {
    seed.to_string()
}

/// Sort key of a track within the permutation defined by `seed`
pub fn permutation_key(seed: f64, track_id: Uuid) -> [u8; 32] {
    Sha256::digest(format!("{}:{}", seed_salt(seed), track_id).as_bytes()).into()
}

/// Sort tracks into the seeded permutation
pub fn seeded_order(tracks: &mut [Track], seed: f64) {
    tracks.sort_by_cached_key(|track| (permutation_key(seed, track.id), track.id));
}

/// Slice `[skip, skip + take)` out of an already ordered sequence
pub fn page<T: Clone>(ordered: &[T], skip: i64, take: i64) -> Vec<T> {
    let start = usize::try_from(skip.max(0))
        .unwrap_or(usize::MAX)
        .min(ordered.len());
    let len = usize::try_from(take.max(0)).unwrap_or(usize::MAX);
    ordered[start..].iter().take(len).cloned().collect()
}

/// Deterministic value in `[0, 1)` derived from the seed, a domain label and an index.
///
/// Distinct domains give independent streams for the same seed.
pub fn unit_mix(seed: f64, domain: &str, index: u64) -> f64 {
    let digest = Sha256::new()
        .chain_update(seed.to_bits().to_be_bytes())
        .chain_update(domain.as_bytes())
        .chain_update(index.to_be_bytes())
        .finalize();
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    // 53 high bits fill an f64 mantissa exactly
    (u64::from_be_bytes(head) >> 11) as f64 / (1u64 << 53) as f64
}

/// Index in `[0, len)` derived from the seed
pub fn mix_index(seed: f64, domain: &str, index: u64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    ((unit_mix(seed, domain, index) * len as f64) as usize).min(len - 1)
}
