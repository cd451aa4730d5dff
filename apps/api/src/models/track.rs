//! Track model for Crossfade
//!
//! This module contains the catalog row for tracks (joined with album and
//! artist names) and the flat projection returned by listing endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Track record from the tracks table, joined with album/artist names
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Track {
    /// Unique track identifier
    pub id: Uuid,

    /// Track title
    pub title: String,

    /// Album this track belongs to (optional for singles)
    pub album_id: Option<Uuid>,

    /// Track artist
    pub artist_id: Option<Uuid>,

    /// Album artist (differs from the track artist on compilations)
    pub album_artist_id: Option<Uuid>,

    // Track metadata
    /// Track number on album
    pub track_number: Option<i32>,

    /// Disc number for multi-disc albums
    pub disc_number: Option<i32>,

    /// Release year
    pub year: Option<i32>,

    /// Whether the track belongs to a compilation album
    pub compilation: bool,

    // File information
    /// Duration in seconds
    pub duration: f64,

    /// Path to audio file
    pub path: String,

    /// Bit rate in kbps
    pub bit_rate: Option<i32>,

    /// File size in bytes
    pub size: i64,

    /// File extension (flac, mp3, ...)
    pub suffix: String,

    // ReplayGain
    pub rg_track_gain: Option<f64>,
    pub rg_track_peak: Option<f64>,
    pub rg_album_gain: Option<f64>,
    pub rg_album_peak: Option<f64>,

    // Joined display names
    pub album_name: Option<String>,
    pub artist_name: Option<String>,
    pub album_artist_name: Option<String>,

    // Timestamps
    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Read-only track projection returned to API clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackListItem {
    pub id: Uuid,
    pub title: String,
    pub album_id: Option<Uuid>,
    pub artist_id: Option<Uuid>,
    pub album_artist_id: Option<Uuid>,
    pub track_number: Option<i32>,
    pub disc_number: Option<i32>,
    pub year: Option<i32>,
    pub duration: f64,
    pub path: String,
    pub bit_rate: Option<i32>,
    pub size: i64,
    pub suffix: String,
    pub album_name: Option<String>,
    pub artist_name: Option<String>,
    pub album_artist_name: Option<String>,
    pub compilation: bool,
    pub rg_track_gain: Option<f64>,
    pub rg_track_peak: Option<f64>,
    pub rg_album_gain: Option<f64>,
    pub rg_album_peak: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Track> for TrackListItem {
    fn from(track: &Track) -> Self {
        Self {
            id: track.id,
            title: track.title.clone(),
            album_id: track.album_id,
            artist_id: track.artist_id,
            album_artist_id: track.album_artist_id,
            track_number: track.track_number,
            disc_number: track.disc_number,
            year: track.year,
            duration: track.duration,
            path: track.path.clone(),
            bit_rate: track.bit_rate,
            size: track.size,
            suffix: track.suffix.clone(),
            album_name: track.album_name.clone(),
            artist_name: track.artist_name.clone(),
            album_artist_name: track.album_artist_name.clone(),
            compilation: track.compilation,
            rg_track_gain: track.rg_track_gain,
            rg_track_peak: track.rg_track_peak,
            rg_album_gain: track.rg_album_gain,
            rg_album_peak: track.rg_album_peak,
            created_at: track.created_at,
            updated_at: track.updated_at,
        }
    }
}
