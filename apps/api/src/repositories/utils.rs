//! Shared SQL fragments for repositories

/// Track columns joined with album, artist and album-artist names.
///
/// Use as `SELECT {TRACK_SELECT} WHERE ...`; the track table is aliased `t`.
pub const TRACK_SELECT: &str = r#"
    t.id, t.title, t.album_id, t.artist_id, t.album_artist_id,
    t.track_number, t.disc_number, t.year, t.compilation,
    t.duration, t.path, t.bit_rate, t.size, t.suffix,
    t.rg_track_gain, t.rg_track_peak, t.rg_album_gain, t.rg_album_peak,
    al.name AS album_name, a.name AS artist_name, aa.name AS album_artist_name,
    t.created_at, t.updated_at
    FROM tracks t
    LEFT JOIN albums al ON al.id = t.album_id
    LEFT JOIN artists a ON a.id = t.artist_id
    LEFT JOIN artists aa ON aa.id = t.album_artist_id
"#;

/// SQL columns for DJ analysis queries
pub const DJ_ANALYSIS_COLUMNS: &str = r#"
    track_id, status, bpm, key, camelot_key, energy, danceability
"#;
