//! Shuffle HTTP route handlers
//!
//! - `GET /tracks/shuffle?seed=&skip=&take=` - One page of the DJ-aware shuffle
//!
//! Out-of-range pagination is clamped by the engine; only a query string that
//! cannot be parsed at all is rejected.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};

use crate::error::{ApiError, ApiResult};
use crate::services::shuffle::{
    DjAnalysisStore, ShuffleRequest, ShuffleResult, ShuffleService, TrackCatalog,
};

/// Shared state for shuffle handlers
pub struct ShuffleState<C, S> {
    pub service: Arc<ShuffleService<C, S>>,
}

impl<C, S> ShuffleState<C, S> {
    pub fn new(service: ShuffleService<C, S>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

// Manual impl: the service sits behind an Arc, so C and S need not be Clone
impl<C, S> Clone for ShuffleState<C, S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

/// Create the shuffle router, nested under `/tracks`
pub fn shuffle_router<C, S>(state: ShuffleState<C, S>) -> Router
where
    C: TrackCatalog + 'static,
    S: DjAnalysisStore + 'static,
{
    Router::new()
        .route("/shuffle", get(shuffle_tracks::<C, S>))
        .with_state(state)
}

async fn shuffle_tracks<C, S>(
    State(state): State<ShuffleState<C, S>>,
    query: Result<Query<ShuffleRequest>, QueryRejection>,
) -> ApiResult<Json<ShuffleResult>>
where
    C: TrackCatalog + 'static,
    S: DjAnalysisStore + 'static,
{
    let Query(request) = query.map_err(|e| ApiError::ValidationError(e.body_text()))?;
    let result = state.service.execute(&request).await?;
    Ok(Json(result))
}
