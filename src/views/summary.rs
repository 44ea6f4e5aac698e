use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::types::{LikedArtistSummary, TrackArtistRow};

struct SummaryAcc {
    name: String,
    track_ids: HashSet<String>,
    last_liked: NaiveDate,
}

/// Groups the exploded track/artist rows into per-artist like summaries.
///
/// For every artist: the count of distinct liked track IDs and the maximum
/// added-at date, truncated to calendar-date granularity. The result is
/// ordered by like count descending, artist ID ascending on ties, which is
/// the stable group-then-sort order of the source data.
///
/// Grouping is keyed by artist ID alone; the first name seen for an ID wins,
/// since IDs are assumed (not verified) to map to one name.
pub fn liked_artist_summary(rows: &[TrackArtistRow]) -> Vec<LikedArtistSummary> {
    let mut groups: HashMap<String, SummaryAcc> = HashMap::new();

    for row in rows {
        let acc = groups
            .entry(row.artist_id.clone())
            .or_insert_with(|| SummaryAcc {
                name: row.artist_name.clone(),
                track_ids: HashSet::new(),
                last_liked: row.added_at,
            });
        acc.track_ids.insert(row.track_id.clone());
        if row.added_at > acc.last_liked {
            acc.last_liked = row.added_at;
        }
    }

    let mut summaries: Vec<LikedArtistSummary> = groups
        .into_iter()
        .map(|(artist_id, acc)| LikedArtistSummary {
            artist_id,
            name: acc.name,
            liked_tracks: acc.track_ids.len() as u64,
            last_liked: acc.last_liked,
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.liked_tracks
            .cmp(&a.liked_tracks)
            .then_with(|| a.artist_id.cmp(&b.artist_id))
    });

    summaries
}
