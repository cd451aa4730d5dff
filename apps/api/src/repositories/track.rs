//! Track repository for catalog reads
//!
//! Seeded sampling orders tracks by `sha256("{seed}:{id}")`, the same key the
//! in-memory sampler uses, so both produce one permutation per seed.

use sqlx::PgPool;
use tracing::instrument;

use super::utils::TRACK_SELECT;
use crate::models::Track;
use crate::services::shuffle::sampler::seed_salt;

/// Repository for track database operations
#[derive(Debug, Clone)]
pub struct TrackRepository {
    pool: PgPool,
}

impl TrackRepository {
    /// Create a new TrackRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Count all tracks in the catalog
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tracks")
            .fetch_one(&self.pool)
            .await
    }

    /// Page `[skip, skip + take)` of the permutation defined by `seed`
    #[instrument(skip(self))]
    pub async fn sample_deterministic(
        &self,
        seed: f64,
        skip: i64,
        take: i64,
    ) -> Result<Vec<Track>, sqlx::Error> {
        let sql = format!(
            "SELECT {} ORDER BY sha256(convert_to($1 || ':' || t.id::text, 'UTF8')), t.id LIMIT $2 OFFSET $3",
            TRACK_SELECT
        );
        sqlx::query_as::<_, Track>(&sql)
            .bind(seed_salt(seed))
            .bind(take)
            .bind(skip)
            .fetch_all(&self.pool)
            .await
    }
}
