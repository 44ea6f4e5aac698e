use std::collections::HashMap;

use crate::{
    types::{TopTrackCard, Track},
    views::explode::explode,
    views::images::{ALBUM_ART_HEIGHT, select_image_url},
};

/// Builds ranked top-track cards from one time window's response.
///
/// Ranks are 1-based in response order. The exploded artist rows are
/// re-aggregated into one row per track: all artist names joined with "; ",
/// the first artist kept separately as the primary. Album art is the 300px
/// variant of the track's album, placeholder when absent.
pub fn top_track_cards(tracks: &[Track]) -> Vec<TopTrackCard> {
    let artist_rows = explode(tracks, |t| &t.id, |t| t.artists.as_slice());

    let mut names_by_track: HashMap<String, Vec<String>> = HashMap::new();
    for (track_id, artist) in artist_rows {
        names_by_track.entry(track_id).or_default().push(artist.name);
    }

    tracks
        .iter()
        .enumerate()
        .map(|(index, track)| {
            let names = names_by_track.get(&track.id).cloned().unwrap_or_default();
            TopTrackCard {
                rank: index as u32 + 1,
                track_id: track.id.clone(),
                track_name: track.name.clone(),
                artist_names: names.join("; "),
                primary_artist: names.first().cloned().unwrap_or_default(),
                album_art_url: select_image_url(&track.album.images, ALBUM_ART_HEIGHT),
            }
        })
        .collect()
}
