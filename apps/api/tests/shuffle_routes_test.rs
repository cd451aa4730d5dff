//! Integration tests for the shuffle HTTP route
//!
//! Drives `GET /tracks/shuffle` through the router with `oneshot`, backed by
//! an in-memory catalog.

mod common;

use axum::{body::Body, http::Request, http::StatusCode, Router};
use tower::ServiceExt;

use crossfade_api::routes::{shuffle_router, ShuffleState};
use crossfade_api::services::shuffle::{DjAnalysisStore, MemoryCatalog, TrackCatalog};
use crossfade_api::services::{ShuffleService, ShuffleSettings};

use common::{analyzed_catalog, body_json, FailingStore};

fn app_with<C, S>(catalog: C, store: S) -> Router
where
    C: TrackCatalog + 'static,
    S: DjAnalysisStore + 'static,
{
    let service = ShuffleService::new(catalog, store, ShuffleSettings::default());
    Router::new().nest("/tracks", shuffle_router(ShuffleState::new(service)))
}

fn app(catalog: MemoryCatalog) -> Router {
    app_with(catalog.clone(), catalog)
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_shuffle_returns_camel_case_page() {
    let response = get(app(analyzed_catalog(30)), "/tracks/shuffle?seed=0.42&take=5").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total"], 30);
    assert_eq!(json["seed"], 0.42);
    assert_eq!(json["skip"], 0);
    assert_eq!(json["take"], 5);
    assert_eq!(json["hasMore"], true);
    assert_eq!(json["djMode"], true);

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 5);
    for field in [
        "id",
        "title",
        "albumId",
        "artistId",
        "albumArtistId",
        "trackNumber",
        "discNumber",
        "year",
        "duration",
        "path",
        "bitRate",
        "size",
        "suffix",
        "albumName",
        "artistName",
        "albumArtistName",
        "compilation",
        "rgTrackGain",
        "rgTrackPeak",
        "rgAlbumGain",
        "rgAlbumPeak",
        "createdAt",
        "updatedAt",
    ] {
        assert!(data[0].get(field).is_some(), "missing field {}", field);
    }
}

#[tokio::test]
async fn test_shuffle_is_deterministic_over_http() {
    let catalog = analyzed_catalog(50);
    let a = body_json(get(app(catalog.clone()), "/tracks/shuffle?seed=0.3&take=10").await).await;
    let b = body_json(get(app(catalog), "/tracks/shuffle?seed=0.3&take=10").await).await;
    assert_eq!(a["data"], b["data"]);
}

#[tokio::test]
async fn test_out_of_range_pagination_is_clamped() {
    let response = get(
        app(analyzed_catalog(10)),
        "/tracks/shuffle?seed=0.1&skip=-10&take=150",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["skip"], 0);
    assert_eq!(json["take"], 100);
}

#[tokio::test]
async fn test_missing_seed_is_generated() {
    let json = body_json(get(app(analyzed_catalog(10)), "/tracks/shuffle").await).await;
    let seed = json["seed"].as_f64().unwrap();
    assert!((0.0..1.0).contains(&seed));
    assert_eq!(json["take"], 50);
}

#[tokio::test]
async fn test_malformed_query_is_rejected() {
    let response = get(app(analyzed_catalog(10)), "/tracks/shuffle?take=lots").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_store_failure_is_server_error() {
    let response = get(
        app_with(analyzed_catalog(10), FailingStore),
        "/tracks/shuffle?seed=0.5",
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "DATABASE_ERROR");
}

#[tokio::test]
async fn test_empty_catalog() {
    let json = body_json(get(app(MemoryCatalog::default()), "/tracks/shuffle?seed=0.5").await).await;
    assert_eq!(json["total"], 0);
    assert_eq!(json["data"], serde_json::json!([]));
    assert_eq!(json["hasMore"], false);
    assert_eq!(json["djMode"], false);
}
