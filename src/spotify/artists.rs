use indicatif::ProgressBar;

use crate::{
    spotify::client::{ApiClient, FetchError},
    types::Artist,
    utils::{self, ARTIST_IDS_PER_REQUEST},
};

/// Retrieves every artist the user follows, across all pages.
///
/// The response wraps its page in an `artists` container object; pagination
/// still follows the standard `next` URL inside that container.
pub async fn followed_artists(
    client: &ApiClient,
    progress: Option<&ProgressBar>,
) -> Result<Vec<Artist>, FetchError> {
    client
        .get_all_pages(
            "me/following",
            "application/json",
            &[("type", "artist")],
            Some("artists"),
            progress,
        )
        .await
}

/// Retrieves full artist objects for a set of artist IDs.
///
/// The endpoint accepts at most [`ARTIST_IDS_PER_REQUEST`] IDs per call, so
/// the distinct input set is chunked into ceil(N/50) batches and one request
/// is issued per batch, results concatenated in batch order. The payload is
/// non-paginated and wrapped under `artists`.
pub async fn artists_by_ids(
    client: &ApiClient,
    ids: &[String],
    progress: Option<&ProgressBar>,
) -> Result<Vec<Artist>, FetchError> {
    let batches = utils::chunk_ids(ids, ARTIST_IDS_PER_REQUEST);
    let num_batches = batches.len();

    let mut artists: Vec<Artist> = Vec::new();
    for (batch_num, batch) in batches.into_iter().enumerate() {
        if let Some(pb) = progress {
            pb.set_message(format!(
                "Fetching artists, batch {} of {}",
                batch_num + 1,
                num_batches
            ));
        }

        let joined = batch.join(",");
        let mut fetched = client
            .get_collection::<Artist>(
                "artists",
                "application/json",
                &[("ids", joined.as_str())],
                Some("artists"),
            )
            .await?;
        artists.append(&mut fetched);
    }

    Ok(artists)
}
