//! DJ analysis repository

use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::utils::DJ_ANALYSIS_COLUMNS;
use crate::models::DjAnalysisRecord;

/// Repository for the track_dj_analysis table
#[derive(Debug, Clone)]
pub struct DjAnalysisRepository {
    pool: PgPool,
}

impl DjAnalysisRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Batch-fetch analysis records for the given tracks, in any status
    #[instrument(skip(self, track_ids), fields(count = track_ids.len()))]
    pub async fn find_by_track_ids(
        &self,
        track_ids: &[Uuid],
    ) -> Result<Vec<DjAnalysisRecord>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM track_dj_analysis WHERE track_id = ANY($1)",
            DJ_ANALYSIS_COLUMNS
        );
        sqlx::query_as::<_, DjAnalysisRecord>(&sql)
            .bind(track_ids)
            .fetch_all(&self.pool)
            .await
    }
}
