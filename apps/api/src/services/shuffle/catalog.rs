//! Data sources the shuffle engine reads from
//!
//! The engine only needs two read-only collaborators: a track catalog that
//! can count and page through a seeded permutation, and a store of DJ
//! analysis records. The PostgreSQL repositories implement both traits;
//! [`MemoryCatalog`] implements them over an in-process snapshot.

use std::collections::HashMap;

use axum::async_trait;
use uuid::Uuid;

use super::sampler::{page, seeded_order};
use crate::error::ApiResult;
use crate::models::{DjAnalysisRecord, Track};
use crate::repositories::{DjAnalysisRepository, TrackRepository};

/// Track source with a stable seeded permutation.
///
/// For a fixed seed, `sample_deterministic` must return consecutive slices of
/// one permutation, so pages at increasing `skip` never overlap.
#[async_trait]
pub trait TrackCatalog: Send + Sync {
    async fn count(&self) -> ApiResult<i64>;

    async fn sample_deterministic(&self, seed: f64, skip: i64, take: i64)
        -> ApiResult<Vec<Track>>;
}

/// Batch lookup of analysis records
#[async_trait]
pub trait DjAnalysisStore: Send + Sync {
    /// Records for the given tracks; tracks never analyzed are simply absent
    async fn find_by_track_ids(&self, track_ids: &[Uuid]) -> ApiResult<Vec<DjAnalysisRecord>>;
}

#[async_trait]
impl TrackCatalog for TrackRepository {
    async fn count(&self) -> ApiResult<i64> {
        Ok(TrackRepository::count(self).await?)
    }

    async fn sample_deterministic(
        &self,
        seed: f64,
        skip: i64,
        take: i64,
    ) -> ApiResult<Vec<Track>> {
        Ok(TrackRepository::sample_deterministic(self, seed, skip, take).await?)
    }
}

#[async_trait]
impl DjAnalysisStore for DjAnalysisRepository {
    async fn find_by_track_ids(&self, track_ids: &[Uuid]) -> ApiResult<Vec<DjAnalysisRecord>> {
        Ok(DjAnalysisRepository::find_by_track_ids(self, track_ids).await?)
    }
}

/// In-memory catalog snapshot with analysis records keyed by track
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    tracks: Vec<Track>,
    analyses: HashMap<Uuid, DjAnalysisRecord>,
}

impl MemoryCatalog {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            analyses: HashMap::new(),
        }
    }

    /// Attach analysis records, replacing any earlier record for the same track
    pub fn with_analyses(mut self, records: impl IntoIterator<Item = DjAnalysisRecord>) -> Self {
        self.analyses
            .extend(records.into_iter().map(|r| (r.track_id, r)));
        self
    }

    /// The full seeded permutation of the snapshot
    pub fn permutation(&self, seed: f64) -> Vec<Track> {
        let mut ordered = self.tracks.clone();
        seeded_order(&mut ordered, seed);
        ordered
    }
}

#[async_trait]
impl TrackCatalog for MemoryCatalog {
    async fn count(&self) -> ApiResult<i64> {
        Ok(self.tracks.len() as i64)
    }

    async fn sample_deterministic(
        &self,
        seed: f64,
        skip: i64,
        take: i64,
    ) -> ApiResult<Vec<Track>> {
        Ok(page(&self.permutation(seed), skip, take))
    }
}

#[async_trait]
impl DjAnalysisStore for MemoryCatalog {
    async fn find_by_track_ids(&self, track_ids: &[Uuid]) -> ApiResult<Vec<DjAnalysisRecord>> {
        Ok(track_ids
            .iter()
            .filter_map(|id| self.analyses.get(id).cloned())
            .collect())
    }
}
