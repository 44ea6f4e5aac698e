use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Shared state between the auth flow and the local callback server.
///
/// The flow stores the `state` parameter it sent to the provider; the
/// callback handler verifies it and deposits the one-time authorization
/// code for the flow to pick up.
#[derive(Debug, Clone)]
pub struct AuthCallbackState {
    pub expected_state: String,
    pub code: Option<String>,
}

/// One variant of an entity's artwork, keyed by pixel height.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

/// A full artist object as returned by `artists?ids=` and `me/following`.
///
/// Track-embedded artists are the simplified variant without images, see
/// [`TrackArtist`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<TrackArtist>,
    pub album: Album,
}

/// An entry of the user's library: the track plus when it was liked.
///
/// `added_at` stays the raw RFC 3339 string from the wire; it is parsed to a
/// calendar date when the exploded track/artist rows are built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTrack {
    pub added_at: String,
    pub track: Track,
}

/// One page of a paginated collection, after any wrapper key is removed.
///
/// `next` is the provider-supplied URL of the following page; its absence
/// terminates the retrieval loop. `total` and `limit` are only used to
/// report page progress.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    pub next: Option<String>,
    pub total: Option<u64>,
    pub limit: Option<u64>,
}

/// One row of the exploded track/artist table: a track with k artists
/// contributes k of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackArtistRow {
    pub track_id: String,
    pub artist_id: String,
    pub artist_name: String,
    pub added_at: NaiveDate,
}

/// Per-artist aggregate over the exploded track/artist rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikedArtistSummary {
    pub artist_id: String,
    pub name: String,
    pub liked_tracks: u64,
    pub last_liked: NaiveDate,
}

/// A ranked top track joined with its artists and 300px album art.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopTrackCard {
    pub rank: u32,
    pub track_id: String,
    pub track_name: String,
    pub artist_names: String,
    pub primary_artist: String,
    pub album_art_url: String,
}

/// Liked-side input to the follow/unfollow join: a liked-artist summary
/// enriched with the artist's 320px image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikedArtistCard {
    pub artist_id: String,
    pub name: String,
    pub image_url: String,
    pub liked_tracks: u64,
    pub last_liked: NaiveDate,
}

/// Followed-side input to the follow/unfollow join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowedArtistCard {
    pub artist_id: String,
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowRecommendation {
    pub artist_id: String,
    pub name: String,
    pub image_url: String,
    pub liked_tracks: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfollowRecommendation {
    pub artist_id: String,
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recommendations {
    pub follow: Vec<FollowRecommendation>,
    pub unfollow: Vec<UnfollowRecommendation>,
}

#[derive(Tabled)]
pub struct ArtistSummaryRow {
    pub artist: String,
    pub liked_tracks: u64,
    pub last_liked: String,
}

#[derive(Tabled)]
pub struct TopTrackRow {
    pub rank: u32,
    pub track: String,
    pub artists: String,
    pub album_art: String,
}

#[derive(Tabled)]
pub struct FollowRecRow {
    pub artist: String,
    pub liked_tracks: u64,
    pub image: String,
}

#[derive(Tabled)]
pub struct UnfollowRecRow {
    pub artist: String,
    pub image: String,
}
