use tabled::Table;

use crate::{
    cli::{api_client, spinner},
    config::Config,
    error, spotify, success,
    types::{FollowRecRow, LikedArtistSummary, Recommendations, UnfollowRecRow},
    views,
};

use crate::spotify::client::ApiClient;

/// Renders the follow/unfollow recommendation lists.
pub async fn recommend(config: &Config) {
    let client = api_client(config).await;

    let pb = spinner("Fetching liked tracks...");
    let saved = match spotify::tracks::saved_tracks(&client, Some(&pb)).await {
        Ok(tracks) => tracks,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch liked tracks: {}", e);
        }
    };
    pb.finish_and_clear();

    let rows = views::track_artist_rows(&saved);
    let summaries = views::liked_artist_summary(&rows);

    let recs = recommendations_for(&client, &summaries).await;
    render_recommendations(&recs);
}

/// Computes the recommendation set for an already-built liked summary.
///
/// Fetches full artist objects for the liked artists (batched), fetches the
/// followed artists, and classifies the outer join of the two sides.
pub(crate) async fn recommendations_for(
    client: &ApiClient,
    summaries: &[LikedArtistSummary],
) -> Recommendations {
    let ids: Vec<String> = summaries.iter().map(|s| s.artist_id.clone()).collect();

    let pb = spinner("Fetching liked artists...");
    let artists = match spotify::artists::artists_by_ids(client, &ids, Some(&pb)).await {
        Ok(artists) => artists,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch artists: {}", e);
        }
    };
    pb.finish_and_clear();

    let liked_cards = views::liked_artist_cards(summaries, &artists);

    let pb = spinner("Fetching followed artists...");
    let followed = match spotify::artists::followed_artists(client, Some(&pb)).await {
        Ok(followed) => followed,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch followed artists: {}", e);
        }
    };
    pb.finish_and_clear();

    let followed_cards = views::followed_artist_cards(&followed);
    views::classify_recommendations(&liked_cards, &followed_cards)
}

pub(crate) fn render_recommendations(recs: &Recommendations) {
    const NO_RECS: &str = "No recommendations. You're on top of things!";

    println!("Recommended artists to follow");
    if recs.follow.is_empty() {
        success!("{}", NO_RECS);
    } else {
        let rows: Vec<FollowRecRow> = recs
            .follow
            .iter()
            .map(|rec| FollowRecRow {
                artist: rec.name.clone(),
                liked_tracks: rec.liked_tracks,
                image: rec.image_url.clone(),
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    println!("\nRecommended artists to unfollow");
    if recs.unfollow.is_empty() {
        success!("{}", NO_RECS);
    } else {
        let rows: Vec<UnfollowRecRow> = recs
            .unfollow
            .iter()
            .map(|rec| UnfollowRecRow {
                artist: rec.name.clone(),
                image: rec.image_url.clone(),
            })
            .collect();
        println!("{}", Table::new(rows));
    }
}
