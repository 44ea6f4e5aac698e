use tabled::Table;

use crate::{
    cli::{
        api_client,
        recommend::{recommendations_for, render_recommendations},
        spinner,
    },
    config::Config,
    error, spotify, success,
    types::{ArtistSummaryRow, TopTrackRow},
    utils::TimeRange,
    views,
};

/// Renders the full dashboard in one pass.
///
/// The liked tracks are fetched once; the summary table and the
/// recommendation join both feed off that single retrieval. Each view is
/// computed and printed strictly after the previous one's fetch finished,
/// and any fetch failure aborts before rendering.
pub async fn dashboard(config: &Config) {
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

    println!("All artists and liked track counts");
    let summary_rows: Vec<ArtistSummaryRow> = summaries
        .iter()
        .map(|summary| ArtistSummaryRow {
            artist: summary.name.clone(),
            liked_tracks: summary.liked_tracks,
            last_liked: summary.last_liked.to_string(),
        })
        .collect();
    println!("{}\n", Table::new(summary_rows));

    for term in TimeRange::ALL {
        let pb = spinner(&format!("Fetching {} top tracks...", term.label()));
        let tracks = match spotify::tracks::top_tracks(&client, term, Some(&pb)).await {
            Ok(tracks) => tracks,
            Err(e) => {
                pb.finish_and_clear();
                error!("Failed to fetch {} top tracks: {}", term.label(), e);
            }
        };
        pb.finish_and_clear();

        let cards = views::top_track_cards(&tracks);
        let table_rows: Vec<TopTrackRow> = cards
            .iter()
            .map(|card| TopTrackRow {
                rank: card.rank,
                track: card.track_name.clone(),
                artists: card.artist_names.clone(),
                album_art: card.album_art_url.clone(),
            })
            .collect();

        println!("My {} top tracks\n{}\n", term.label(), Table::new(table_rows));
    }

    let recs = recommendations_for(&client, &summaries).await;
    render_recommendations(&recs);
}
