//! # Views Module
//!
//! Derived views computed from the fetched API data with explicit relational
//! operations: exploding nested one-to-many fields into flat rows, grouping
//! with aggregation, and joining tables on artist ID.
//!
//! Everything in this module is pure and synchronous; all network I/O
//! happens before these functions run. The views are:
//!
//! - [`track_artist_rows`] / [`explode`] - one row per (track, artist) pair
//! - [`liked_artist_summary`] - like counts and last-liked date per artist
//! - [`top_track_cards`] - ranked top tracks with artists and album art
//! - [`classify_recommendations`] - the liked/followed outer join split into
//!   follow and unfollow candidates
//! - [`select_image_url`] - image variant selection with placeholder fallback

mod explode;
mod images;
mod recommend;
mod summary;
mod top;

pub use explode::{explode, track_artist_rows};
pub use images::{ALBUM_ART_HEIGHT, ARTIST_IMAGE_HEIGHT, PLACEHOLDER_IMAGE_URL, select_image_url};
pub use recommend::{
    FOLLOW_THRESHOLD, classify_recommendations, followed_artist_cards, liked_artist_cards,
};
pub use summary::liked_artist_summary;
pub use top::top_track_cards;
