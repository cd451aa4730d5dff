//! Test fixtures for API integration tests
//!
//! Builders for catalog tracks, analysis records and in-memory catalogs.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crossfade_api::models::{AnalysisStatus, DjAnalysisRecord, Track};
use crossfade_api::services::shuffle::MemoryCatalog;

/// Camelot keys cycled through by `completed_record`
const KEYS: [&str; 8] = ["8A", "9A", "3B", "10A", "5B", "12A", "1B", "7A"];

/// A catalog track with a stable id derived from `n`
pub fn track(n: u128) -> Track {
    let stamp = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    Track {
        id: Uuid::from_u128(n),
        title: format!("Track {:03}", n),
        album_id: Some(Uuid::from_u128(10_000 + n / 10)),
        artist_id: Some(Uuid::from_u128(20_000 + n % 7)),
        album_artist_id: None,
        track_number: Some((n % 12) as i32 + 1),
        disc_number: Some(1),
        year: Some(2020),
        compilation: false,
        duration: 180.0 + n as f64,
        path: format!("/music/{:03}.flac", n),
        bit_rate: Some(1411),
        size: 30_000_000,
        suffix: "flac".to_string(),
        rg_track_gain: Some(-7.5),
        rg_track_peak: Some(0.97),
        rg_album_gain: None,
        rg_album_peak: None,
        album_name: Some(format!("Album {}", n / 10)),
        artist_name: Some(format!("Artist {}", n % 7)),
        album_artist_name: None,
        created_at: stamp,
        updated_at: stamp,
    }
}

/// Tracks `1..=n`
pub fn tracks(n: u128) -> Vec<Track> {
    (1..=n).map(track).collect()
}

/// Analysis record with the given status and varied attributes
pub fn record(n: u128, status: AnalysisStatus) -> DjAnalysisRecord {
    DjAnalysisRecord {
        track_id: Uuid::from_u128(n),
        status,
        bpm: Some(118.0 + (n % 9) as f64),
        key: None,
        camelot_key: Some(KEYS[(n % KEYS.len() as u128) as usize].to_string()),
        energy: Some(((n % 10) as f64) / 10.0),
        danceability: Some(0.5 + ((n % 5) as f64) / 10.0),
    }
}

pub fn completed_record(n: u128) -> DjAnalysisRecord {
    record(n, AnalysisStatus::Completed)
}

/// Catalog of `total` tracks where `analyzed` ids have completed analysis
pub fn catalog_with(total: u128, analyzed: impl IntoIterator<Item = u128>) -> MemoryCatalog {
    MemoryCatalog::new(tracks(total)).with_analyses(analyzed.into_iter().map(completed_record))
}

/// Catalog of `total` tracks, all analyzed
pub fn analyzed_catalog(total: u128) -> MemoryCatalog {
    catalog_with(total, 1..=total)
}
