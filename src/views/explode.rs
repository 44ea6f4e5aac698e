use std::collections::HashMap;

use chrono::NaiveDate;

use crate::{
    types::{SavedTrack, TrackArtistRow},
    utils,
};

/// Unrolls a nested one-to-many field into flat rows.
///
/// For every source row, emits one `(source id, nested element)` pair per
/// element of the nested list, preserving source order and element order
/// within each source row. A row whose nested list is empty contributes
/// nothing.
pub fn explode<T, U, I, N>(rows: &[T], id: I, nested: N) -> Vec<(String, U)>
where
    I: Fn(&T) -> &str,
    N: Fn(&T) -> &[U],
    U: Clone,
{
    let mut out = Vec::new();
    for row in rows {
        for item in nested(row) {
            out.push((id(row).to_string(), item.clone()));
        }
    }
    out
}

/// Explodes liked tracks into the track/artist table.
///
/// A track with k artists yields exactly k rows, each carrying the track ID
/// and the track's added-at calendar date. The date is joined back onto the
/// exploded pairs by track ID, mirroring how the artist rows later rejoin
/// their source tracks.
pub fn track_artist_rows(tracks: &[SavedTrack]) -> Vec<TrackArtistRow> {
    let added_dates: HashMap<&str, NaiveDate> = tracks
        .iter()
        .map(|saved| {
            (
                saved.track.id.as_str(),
                utils::parse_added_at_date(&saved.added_at),
            )
        })
        .collect();

    explode(tracks, |s| &s.track.id, |s| s.track.artists.as_slice())
        .into_iter()
        .map(|(track_id, artist)| {
            let added_at = added_dates
                .get(track_id.as_str())
                .copied()
                .unwrap_or_default();
            TrackArtistRow {
                track_id,
                artist_id: artist.id,
                artist_name: artist.name,
                added_at,
            }
        })
        .collect()
}
