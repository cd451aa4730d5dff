//! DJ analysis model for Crossfade
//!
//! Rows of the `track_dj_analysis` table are produced by the audio analysis
//! pipeline. A missing attribute means "unknown for that axis", never zero.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::camelot::CamelotKey;

/// Analysis job status matching PostgreSQL dj_analysis_status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "dj_analysis_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Failed,
}

impl AnalysisStatus {
    /// Only completed analyses carry usable DJ attributes
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Analysis record from the track_dj_analysis table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DjAnalysisRecord {
    pub track_id: Uuid,
    pub status: AnalysisStatus,
    pub bpm: Option<f64>,
    pub key: Option<String>,
    pub camelot_key: Option<String>,
    pub energy: Option<f64>,
    pub danceability: Option<f64>,
}

impl DjAnalysisRecord {
    /// Extract the DJ attributes carried by this record
    pub fn dj_data(&self) -> TrackDjData {
        TrackDjData {
            track_id: self.track_id,
            bpm: self.bpm,
            key: self.key.clone(),
            camelot_key: self.camelot_key.clone(),
            energy: self.energy,
            danceability: self.danceability,
        }
    }
}

/// The closed set of attributes harmonic ordering compares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DjAxis {
    Key,
    Bpm,
    Energy,
    Danceability,
}

impl DjAxis {
    pub const ALL: [DjAxis; 4] = [Self::Key, Self::Bpm, Self::Energy, Self::Danceability];
}

/// Per-track DJ attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackDjData {
    pub track_id: Uuid,
    pub bpm: Option<f64>,
    pub key: Option<String>,
    pub camelot_key: Option<String>,
    pub energy: Option<f64>,
    pub danceability: Option<f64>,
}

impl TrackDjData {
    /// Resolve the track's position on the Camelot wheel.
    ///
    /// An explicit Camelot key wins over the standard key name.
    pub fn camelot(&self) -> Option<CamelotKey> {
        self.camelot_key
            .as_deref()
            .and_then(CamelotKey::parse)
            .or_else(|| self.key.as_deref().and_then(CamelotKey::parse))
    }

    /// Tempo, ignoring non-positive or non-finite values
    pub fn tempo(&self) -> Option<f64> {
        self.bpm.filter(|bpm| bpm.is_finite() && *bpm > 0.0)
    }

    /// Energy in 0.0-1.0
    pub fn energy_level(&self) -> Option<f64> {
        self.energy
            .filter(|v| v.is_finite())
            .map(|v| v.clamp(0.0, 1.0))
    }

    /// Danceability in 0.0-1.0
    pub fn danceability_level(&self) -> Option<f64> {
        self.danceability
            .filter(|v| v.is_finite())
            .map(|v| v.clamp(0.0, 1.0))
    }

    /// Whether this track has a usable value on the given axis
    pub fn has_axis(&self, axis: DjAxis) -> bool {
        match axis {
            DjAxis::Key => self.camelot().is_some(),
            DjAxis::Bpm => self.tempo().is_some(),
            DjAxis::Energy => self.energy_level().is_some(),
            DjAxis::Danceability => self.danceability_level().is_some(),
        }
    }

    /// Whether any axis can be compared at all
    pub fn is_usable(&self) -> bool {
        DjAxis::ALL.iter().any(|axis| self.has_axis(*axis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: AnalysisStatus) -> DjAnalysisRecord {
        DjAnalysisRecord {
            track_id: Uuid::new_v4(),
            status,
            bpm: Some(124.0),
            key: Some("A minor".to_string()),
            camelot_key: None,
            energy: Some(0.7),
            danceability: None,
        }
    }

    #[test]
    fn test_only_completed_status_counts() {
        assert!(AnalysisStatus::Completed.is_completed());
        assert!(!AnalysisStatus::Pending.is_completed());
        assert!(!AnalysisStatus::Processing.is_completed());
        assert!(!AnalysisStatus::Failed.is_completed());
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&AnalysisStatus::Completed).unwrap();
        assert_eq!(json, r#""completed""#);
    }

    #[test]
    fn test_dj_data_copies_attributes() {
        let rec = record(AnalysisStatus::Completed);
        let data = rec.dj_data();
        assert_eq!(data.track_id, rec.track_id);
        assert_eq!(data.bpm, Some(124.0));
        assert_eq!(data.camelot().unwrap().to_string(), "8A");
    }

    #[test]
    fn test_camelot_key_takes_precedence() {
        let data = TrackDjData {
            key: Some("C".to_string()),
            camelot_key: Some("5A".to_string()),
            ..Default::default()
        };
        assert_eq!(data.camelot().unwrap().to_string(), "5A");

        let data = TrackDjData {
            key: Some("C".to_string()),
            camelot_key: Some("not-a-key".to_string()),
            ..Default::default()
        };
        assert_eq!(data.camelot().unwrap().to_string(), "8B");
    }

    #[test]
    fn test_axis_availability() {
        let data = record(AnalysisStatus::Completed).dj_data();
        assert!(data.has_axis(DjAxis::Key));
        assert!(data.has_axis(DjAxis::Bpm));
        assert!(data.has_axis(DjAxis::Energy));
        assert!(!data.has_axis(DjAxis::Danceability));
        assert!(data.is_usable());

        let empty = TrackDjData {
            bpm: Some(0.0),
            energy: Some(f64::NAN),
            ..Default::default()
        };
        assert!(!empty.is_usable());
    }
}
