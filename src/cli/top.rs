use tabled::Table;

use crate::{
    cli::{api_client, spinner},
    config::Config,
    error, spotify,
    types::TopTrackRow,
    utils::TimeRange,
    views,
};

/// Renders the top-track table for one time window, or all three.
pub async fn top(config: &Config, term: Option<TimeRange>) {
    let client = api_client(config).await;

    let terms: Vec<TimeRange> = match term {
        Some(term) => vec![term],
        None => TimeRange::ALL.to_vec(),
    };

    for term in terms {
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
}
