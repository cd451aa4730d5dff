//! Database models and types for Crossfade
//!
//! This module contains SQLx models for:
//! - Tracks (joined with album and artist names) and their API projection
//! - DJ analysis records produced by the audio analysis pipeline
//! - Camelot wheel keys used for harmonic mixing

pub mod camelot;
pub mod dj_analysis;
pub mod track;

pub use camelot::{CamelotKey, KeyMode};
pub use dj_analysis::{AnalysisStatus, DjAnalysisRecord, DjAxis, TrackDjData};
pub use track::{Track, TrackListItem};
