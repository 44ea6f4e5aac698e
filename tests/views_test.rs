use chrono::NaiveDate;
use spotidash::types::{
    Album, Artist, FollowedArtistCard, Image, LikedArtistCard, LikedArtistSummary, SavedTrack,
    Track, TrackArtist,
};
use spotidash::views::*;

// Helper to create an image variant of a given height
fn image(url: &str, height: u32) -> Image {
    Image {
        url: url.to_string(),
        height: Some(height),
        width: Some(height),
    }
}

// Helper to create a track with artist names derived from ids
fn track(id: &str, name: &str, artist_names: &[&str], album_images: Vec<Image>) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        artists: artist_names
            .iter()
            .map(|artist| TrackArtist {
                id: format!("{}_id", artist.to_lowercase()),
                name: artist.to_string(),
            })
            .collect(),
        album: Album {
            id: format!("{}_album", id),
            name: format!("{} Album", name),
            images: album_images,
        },
    }
}

fn saved(id: &str, name: &str, artist_names: &[&str], added_at: &str) -> SavedTrack {
    SavedTrack {
        added_at: added_at.to_string(),
        track: track(id, name, artist_names, Vec::new()),
    }
}

fn full_artist(id: &str, name: &str, images: Vec<Image>) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        images,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_select_image_url_matching_height() {
    let images = vec![
        image("https://img/640", 640),
        image("https://img/320", 320),
        image("https://img/64", 64),
    ];

    assert_eq!(select_image_url(&images, 320), "https://img/320");
    assert_eq!(select_image_url(&images, 64), "https://img/64");
}

#[test]
fn test_select_image_url_placeholder_on_miss() {
    let images = vec![image("https://img/640", 640)];

    // No 300px variant exists, the fixed placeholder takes over
    assert_eq!(select_image_url(&images, 300), PLACEHOLDER_IMAGE_URL);
    assert_eq!(select_image_url(&[], 320), PLACEHOLDER_IMAGE_URL);
}

#[test]
fn test_select_image_url_first_match_wins() {
    let images = vec![
        image("https://img/first", 320),
        image("https://img/second", 320),
    ];

    assert_eq!(select_image_url(&images, 320), "https://img/first");
}

#[test]
fn test_explode_cardinality_and_order() {
    let tracks = vec![
        track("t1", "One", &["Alice", "Bob"], Vec::new()),
        track("t2", "Two", &["Carol"], Vec::new()),
    ];

    let pairs = explode(&tracks, |t| &t.id, |t| t.artists.as_slice());

    // A track with k artists yields exactly k pairs, in source order
    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[0].0, "t1");
    assert_eq!(pairs[0].1.name, "Alice");
    assert_eq!(pairs[1].0, "t1");
    assert_eq!(pairs[1].1.name, "Bob");
    assert_eq!(pairs[2].0, "t2");
    assert_eq!(pairs[2].1.name, "Carol");
}

#[test]
fn test_track_artist_rows_carry_id_and_date() {
    let tracks = vec![
        saved("t1", "One", &["Alice", "Bob"], "2023-10-17T08:00:00Z"),
        saved("t2", "Two", &["Alice"], "2023-11-02T21:15:00Z"),
    ];

    let rows = track_artist_rows(&tracks);

    assert_eq!(rows.len(), 3);
    assert!(
        rows.iter()
            .filter(|r| r.track_id == "t1")
            .all(|r| r.added_at == date(2023, 10, 17))
    );
    assert_eq!(rows[2].track_id, "t2");
    assert_eq!(rows[2].artist_id, "alice_id");
    assert_eq!(rows[2].added_at, date(2023, 11, 2));
}

#[test]
fn test_liked_artist_summary_counts_and_dates() {
    let tracks = vec![
        saved("t1", "One", &["Alice", "Bob"], "2023-01-10T00:00:00Z"),
        saved("t2", "Two", &["Alice"], "2023-03-05T00:00:00Z"),
        saved("t3", "Three", &["Alice"], "2023-02-20T00:00:00Z"),
        saved("t4", "Four", &["Bob"], "2023-01-01T00:00:00Z"),
    ];

    let summaries = liked_artist_summary(&track_artist_rows(&tracks));

    assert_eq!(summaries.len(), 2);

    // Ordered by like count descending
    assert_eq!(summaries[0].name, "Alice");
    assert_eq!(summaries[0].liked_tracks, 3);
    assert_eq!(summaries[0].last_liked, date(2023, 3, 5));

    assert_eq!(summaries[1].name, "Bob");
    assert_eq!(summaries[1].liked_tracks, 2);
    assert_eq!(summaries[1].last_liked, date(2023, 1, 10));
}

#[test]
fn test_liked_artist_summary_distinct_track_count() {
    // The same (track, artist) row appearing twice counts one distinct track
    let tracks = vec![
        saved("t1", "One", &["Alice"], "2023-01-10T00:00:00Z"),
        saved("t1", "One", &["Alice"], "2023-01-10T00:00:00Z"),
    ];

    let summaries = liked_artist_summary(&track_artist_rows(&tracks));
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].liked_tracks, 1);
}

#[test]
fn test_liked_artist_summary_tie_order() {
    let tracks = vec![
        saved("t1", "One", &["Zoe"], "2023-01-01T00:00:00Z"),
        saved("t2", "Two", &["Ann"], "2023-01-02T00:00:00Z"),
    ];

    let summaries = liked_artist_summary(&track_artist_rows(&tracks));

    // Equal counts fall back to artist id ascending
    assert_eq!(summaries[0].name, "Ann");
    assert_eq!(summaries[1].name, "Zoe");
}

#[test]
fn test_top_track_cards_rank_and_concatenation() {
    let tracks = vec![
        track(
            "t1",
            "Duet",
            &["Alice", "Bob"],
            vec![image("https://img/cover300", 300), image("https://img/cover64", 64)],
        ),
        track("t2", "Solo", &["Carol"], Vec::new()),
    ];

    let cards = top_track_cards(&tracks);

    assert_eq!(cards.len(), 2);

    // Ranks are 1-based in response order
    assert_eq!(cards[0].rank, 1);
    assert_eq!(cards[1].rank, 2);

    // Multi-artist tracks concatenate with "; " and keep the first as primary
    assert_eq!(cards[0].artist_names, "Alice; Bob");
    assert_eq!(cards[0].primary_artist, "Alice");
    assert_eq!(cards[1].artist_names, "Carol");
    assert_eq!(cards[1].primary_artist, "Carol");

    // 300px album art when present, placeholder otherwise
    assert_eq!(cards[0].album_art_url, "https://img/cover300");
    assert_eq!(cards[1].album_art_url, PLACEHOLDER_IMAGE_URL);
}

#[test]
fn test_liked_artist_cards_inner_join() {
    let summaries = vec![
        LikedArtistSummary {
            artist_id: "a1".to_string(),
            name: "Alice".to_string(),
            liked_tracks: 10,
            last_liked: date(2023, 3, 5),
        },
        LikedArtistSummary {
            artist_id: "a2".to_string(),
            name: "Bob".to_string(),
            liked_tracks: 4,
            last_liked: date(2023, 1, 1),
        },
    ];
    // Only Alice has a fetched artist object
    let artists = vec![full_artist(
        "a1",
        "Alice",
        vec![image("https://img/alice320", 320)],
    )];

    let cards = liked_artist_cards(&summaries, &artists);

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].artist_id, "a1");
    assert_eq!(cards[0].image_url, "https://img/alice320");
    assert_eq!(cards[0].liked_tracks, 10);
}

#[test]
fn test_classify_recommendations() {
    // Liked side: A with 10 liked tracks, B with 3. Followed side: B and C.
    let liked = vec![
        LikedArtistCard {
            artist_id: "A".to_string(),
            name: "Artist A".to_string(),
            image_url: "https://img/a".to_string(),
            liked_tracks: 10,
            last_liked: date(2023, 5, 1),
        },
        LikedArtistCard {
            artist_id: "B".to_string(),
            name: "Artist B".to_string(),
            image_url: "https://img/b".to_string(),
            liked_tracks: 3,
            last_liked: date(2023, 4, 1),
        },
    ];
    let followed = vec![
        FollowedArtistCard {
            artist_id: "B".to_string(),
            name: "Artist B".to_string(),
            image_url: "https://img/b-followed".to_string(),
        },
        FollowedArtistCard {
            artist_id: "C".to_string(),
            name: "Artist C".to_string(),
            image_url: "https://img/c".to_string(),
        },
    ];

    let recs = classify_recommendations(&liked, &followed);

    // A is liked-only with count >= 8 -> follow candidate
    assert_eq!(recs.follow.len(), 1);
    assert_eq!(recs.follow[0].artist_id, "A");
    assert_eq!(recs.follow[0].liked_tracks, 10);

    // C is followed-only -> unfollow candidate, fields from the followed side
    assert_eq!(recs.unfollow.len(), 1);
    assert_eq!(recs.unfollow[0].artist_id, "C");
    assert_eq!(recs.unfollow[0].name, "Artist C");
    assert_eq!(recs.unfollow[0].image_url, "https://img/c");

    // B is on both sides and appears in neither list
    assert!(!recs.follow.iter().any(|r| r.artist_id == "B"));
    assert!(!recs.unfollow.iter().any(|r| r.artist_id == "B"));
}

#[test]
fn test_classify_recommendations_threshold() {
    // Liked-only but below the threshold -> no recommendation
    let liked = vec![LikedArtistCard {
        artist_id: "D".to_string(),
        name: "Artist D".to_string(),
        image_url: "https://img/d".to_string(),
        liked_tracks: FOLLOW_THRESHOLD - 1,
        last_liked: date(2023, 5, 1),
    }];

    let recs = classify_recommendations(&liked, &[]);
    assert!(recs.follow.is_empty());
    assert!(recs.unfollow.is_empty());
}

#[test]
fn test_followed_artist_cards_image_selection() {
    let artists = vec![
        full_artist("a1", "Alice", vec![image("https://img/alice320", 320)]),
        full_artist("a2", "Bob", vec![image("https://img/bob640", 640)]),
    ];

    let cards = followed_artist_cards(&artists);

    assert_eq!(cards[0].image_url, "https://img/alice320");
    // No 320px variant -> placeholder
    assert_eq!(cards[1].image_url, PLACEHOLDER_IMAGE_URL);
}
