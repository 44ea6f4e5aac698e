use std::collections::{HashMap, HashSet};

use crate::{
    types::{
        Artist, FollowRecommendation, FollowedArtistCard, LikedArtistCard, LikedArtistSummary,
        Recommendations, UnfollowRecommendation,
    },
    views::images::{ARTIST_IMAGE_HEIGHT, select_image_url},
};

/// Minimum liked-track count for an unfollowed artist to become a follow
/// candidate.
pub const FOLLOW_THRESHOLD: u64 = 8;

/// Joins the liked-artist summaries with their fetched full artist objects.
///
/// Inner join on artist ID: a summary with no fetched artist object is
/// dropped, summary order is preserved, first artist object wins when an ID
/// repeats. Each surviving row picks up the artist's 320px portrait.
pub fn liked_artist_cards(
    summaries: &[LikedArtistSummary],
    artists: &[Artist],
) -> Vec<LikedArtistCard> {
    let mut images_by_id: HashMap<&str, &Artist> = HashMap::new();
    for artist in artists {
        images_by_id.entry(artist.id.as_str()).or_insert(artist);
    }

    summaries
        .iter()
        .filter_map(|summary| {
            images_by_id
                .get(summary.artist_id.as_str())
                .map(|artist| LikedArtistCard {
                    artist_id: summary.artist_id.clone(),
                    name: summary.name.clone(),
                    image_url: select_image_url(&artist.images, ARTIST_IMAGE_HEIGHT),
                    liked_tracks: summary.liked_tracks,
                    last_liked: summary.last_liked,
                })
        })
        .collect()
}

/// Maps followed artists onto join-ready cards with their 320px portrait.
pub fn followed_artist_cards(artists: &[Artist]) -> Vec<FollowedArtistCard> {
    artists
        .iter()
        .map(|artist| FollowedArtistCard {
            artist_id: artist.id.clone(),
            name: artist.name.clone(),
            image_url: select_image_url(&artist.images, ARTIST_IMAGE_HEIGHT),
        })
        .collect()
}

/// Classifies the outer join of liked and followed artists.
///
/// Three-way split on artist ID:
/// - present on both sides: ignored, the user already follows the artist
/// - liked-only with at least [`FOLLOW_THRESHOLD`] liked tracks: follow
///   candidate
/// - followed-only: unfollow candidate, with name and image taken from the
///   followed side since the liked side has no row to supply them
///
/// Input order is preserved within each output list.
pub fn classify_recommendations(
    liked: &[LikedArtistCard],
    followed: &[FollowedArtistCard],
) -> Recommendations {
    let followed_ids: HashSet<&str> = followed.iter().map(|c| c.artist_id.as_str()).collect();
    let liked_ids: HashSet<&str> = liked.iter().map(|c| c.artist_id.as_str()).collect();

    let follow = liked
        .iter()
        .filter(|card| {
            !followed_ids.contains(card.artist_id.as_str())
                && card.liked_tracks >= FOLLOW_THRESHOLD
        })
        .map(|card| FollowRecommendation {
            artist_id: card.artist_id.clone(),
            name: card.name.clone(),
            image_url: card.image_url.clone(),
            liked_tracks: card.liked_tracks,
        })
        .collect();

    let unfollow = followed
        .iter()
        .filter(|card| !liked_ids.contains(card.artist_id.as_str()))
        .map(|card| UnfollowRecommendation {
            artist_id: card.artist_id.clone(),
            name: card.name.clone(),
            image_url: card.image_url.clone(),
        })
        .collect();

    Recommendations { follow, unfollow }
}
