//! Shared builders for shuffle unit tests

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::models::{AnalysisStatus, DjAnalysisRecord, Track, TrackDjData};

pub fn track(n: u128) -> Track {
    let stamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Track {
        id: Uuid::from_u128(n),
        title: format!("Track {}", n),
        album_id: None,
        artist_id: None,
        album_artist_id: None,
        track_number: None,
        disc_number: None,
        year: None,
        compilation: false,
        duration: 200.0,
        path: format!("/music/{}.mp3", n),
        bit_rate: Some(320),
        size: 8_000_000,
        suffix: "mp3".to_string(),
        rg_track_gain: None,
        rg_track_peak: None,
        rg_album_gain: None,
        rg_album_peak: None,
        album_name: None,
        artist_name: None,
        album_artist_name: None,
        created_at: stamp,
        updated_at: stamp,
    }
}

pub fn dj(camelot: &str, bpm: f64, energy: f64, danceability: f64) -> TrackDjData {
    TrackDjData {
        track_id: Uuid::nil(),
        bpm: Some(bpm),
        key: None,
        camelot_key: Some(camelot.to_string()),
        energy: Some(energy),
        danceability: Some(danceability),
    }
}

pub fn analysis(n: u128, status: AnalysisStatus) -> DjAnalysisRecord {
    DjAnalysisRecord {
        track_id: Uuid::from_u128(n),
        status,
        bpm: Some(120.0 + (n % 10) as f64),
        key: None,
        camelot_key: Some(format!("{}A", (n % 12) + 1)),
        energy: Some(0.5),
        danceability: Some(0.5),
    }
}
