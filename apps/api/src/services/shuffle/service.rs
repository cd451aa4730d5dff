//! Shuffle orchestration
//!
//! Coordinates the sampler, the coverage gate, path building and
//! interleaving, and shapes the page returned to callers.

use sqlx::PgPool;
use tracing::{debug, field, instrument, Span};

use super::catalog::{DjAnalysisStore, TrackCatalog};
use super::coverage::{self, CoverageDecision, FallbackReason};
use super::interleave::interleave;
use super::path::build_path;
use super::request::{ShufflePage, ShuffleRequest, ShuffleResult};
use super::sampler;
use crate::error::ApiResult;
use crate::models::{Track, TrackListItem};
use crate::repositories::{DjAnalysisRepository, TrackRepository};

/// Default share of the pool that must have completed analysis
pub const DEFAULT_MIN_COVERAGE: f64 = 0.5;

/// Default pool size as a multiple of the requested page size
pub const DEFAULT_POOL_MULTIPLIER: i64 = 3;

/// Tuning for harmonic ordering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShuffleSettings {
    /// When false every request uses the plain seeded shuffle
    pub dj_enabled: bool,
    /// Fraction of the pool (0.0 - 1.0) that must be analyzed
    pub min_coverage: f64,
    /// Pool size is `take * pool_multiplier`, capped by the catalog size
    pub pool_multiplier: i64,
}

impl Default for ShuffleSettings {
    fn default() -> Self {
        Self {
            dj_enabled: true,
            min_coverage: DEFAULT_MIN_COVERAGE,
            pool_multiplier: DEFAULT_POOL_MULTIPLIER,
        }
    }
}

/// Shuffle service over a track catalog and an analysis store
#[derive(Debug, Clone)]
pub struct ShuffleService<C, S> {
    catalog: C,
    analyses: S,
    settings: ShuffleSettings,
}

impl ShuffleService<TrackRepository, DjAnalysisRepository> {
    /// Shuffle service backed by PostgreSQL
    pub fn from_pool(pool: PgPool, settings: ShuffleSettings) -> Self {
        Self::new(
            TrackRepository::new(pool.clone()),
            DjAnalysisRepository::new(pool),
            settings,
        )
    }
}

impl<C, S> ShuffleService<C, S>
where
    C: TrackCatalog,
    S: DjAnalysisStore,
{
    pub fn new(catalog: C, analyses: S, settings: ShuffleSettings) -> Self {
        Self {
            catalog,
            analyses,
            settings,
        }
    }

    pub fn settings(&self) -> &ShuffleSettings {
        &self.settings
    }

    /// Produce one page of shuffled tracks.
    ///
    /// The first page is ordered harmonically when enough of the sampled pool
    /// has completed analysis; every other case is a plain page of the seeded
    /// permutation. Pagination values are clamped, never rejected.
    ///
    /// # Errors
    /// - `ApiError::Database` - If the catalog or analysis store fails
    #[instrument(skip_all, fields(seed = field::Empty, skip = field::Empty, take = field::Empty))]
    pub async fn execute(&self, request: &ShuffleRequest) -> ApiResult<ShuffleResult> {
        let page = request.normalize();
        let span = Span::current();
        span.record("seed", page.seed);
        span.record("skip", page.skip);
        span.record("take", page.take);

        match self.precheck(&page) {
            Some(reason) => {
                debug!(reason = %reason, "Using seeded shuffle");
                self.plain_page(page).await
            }
            None => self.first_page(page).await,
        }
    }

    fn precheck(&self, page: &ShufflePage) -> Option<FallbackReason> {
        if !self.settings.dj_enabled {
            Some(FallbackReason::Disabled)
        } else if page.skip > 0 {
            Some(FallbackReason::NotFirstPage)
        } else {
            None
        }
    }

    async fn plain_page(&self, page: ShufflePage) -> ApiResult<ShuffleResult> {
        let (total, tracks) = tokio::try_join!(
            self.catalog.count(),
            self.catalog
                .sample_deterministic(page.seed, page.skip, page.take)
        )?;
        let has_more = page.skip + (tracks.len() as i64) < total;
        Ok(shape(&tracks, total, page, has_more, false))
    }

    async fn first_page(&self, page: ShufflePage) -> ApiResult<ShuffleResult> {
        let pool_take = page
            .take
            .saturating_mul(self.settings.pool_multiplier.max(1));
        let (total, pool) = tokio::try_join!(
            self.catalog.count(),
            self.catalog.sample_deterministic(page.seed, 0, pool_take)
        )?;

        // The pool is the head of the same permutation, so its prefix is
        // exactly the plain first page.
        let prefix = sampler::page(&pool, 0, page.take);

        let ids: Vec<_> = pool.iter().map(|t| t.id).collect();
        let records = if ids.is_empty() {
            Vec::new()
        } else {
            self.analyses.find_by_track_ids(&ids).await?
        };

        match coverage::evaluate(pool, records, self.settings.min_coverage) {
            CoverageDecision::Harmonic { analyzed, extras } => {
                let analyzed_count = analyzed.len();
                let interleaved = extras.len();
                let path = build_path(analyzed, page.seed);
                let merged = interleave(path, extras, page.seed);
                let tracks = page_of(merged, page.take);
                debug!(
                    analyzed = analyzed_count,
                    interleaved, "Applied harmonic ordering"
                );
                Ok(shape(&tracks, total, page, page.take < total, true))
            }
            CoverageDecision::Fallback(reason) => {
                if let FallbackReason::InsufficientCoverage {
                    completed,
                    pool_size,
                } = reason
                {
                    debug!(completed, pool_size, "Insufficient analysis coverage");
                }
                debug!(reason = %reason, "Using seeded shuffle");
                let has_more = (prefix.len() as i64) < total;
                Ok(shape(&prefix, total, page, has_more, false))
            }
        }
    }
}

fn page_of(mut tracks: Vec<Track>, take: i64) -> Vec<Track> {
    tracks.truncate(usize::try_from(take).unwrap_or(0));
    tracks
}

fn shape(
    tracks: &[Track],
    total: i64,
    page: ShufflePage,
    has_more: bool,
    dj_mode: bool,
) -> ShuffleResult {
    ShuffleResult {
        data: tracks.iter().map(TrackListItem::from).collect(),
        total,
        seed: page.seed,
        skip: page.skip,
        take: page.take,
        has_more,
        dj_mode,
    }
}
