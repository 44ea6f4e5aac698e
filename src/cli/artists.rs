use tabled::Table;

use crate::{
    cli::{api_client, spinner},
    config::Config,
    error, spotify, success,
    types::ArtistSummaryRow,
    views,
};

/// Renders the liked-artist summary table.
///
/// Fetches every liked track, explodes the track/artist associations, and
/// groups them into per-artist like counts with the last-liked date. With
/// `--top N` only the N artists with the most liked tracks are shown.
pub async fn artists(config: &Config, top: Option<usize>) {
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
    success!(
        "{} liked tracks by {} artists",
        saved.len(),
        summaries.len()
    );

    let limit = top.unwrap_or(summaries.len());
    let table_rows: Vec<ArtistSummaryRow> = summaries
        .iter()
        .take(limit)
        .map(|summary| ArtistSummaryRow {
            artist: summary.name.clone(),
            liked_tracks: summary.liked_tracks,
            last_liked: summary.last_liked.to_string(),
        })
        .collect();

    println!("{}", Table::new(table_rows));
}
