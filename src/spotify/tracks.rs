use indicatif::ProgressBar;

use crate::{
    spotify::client::{ApiClient, FetchError},
    types::{SavedTrack, Track},
    utils::TimeRange,
};

/// Retrieves every liked track in the user's library, across all pages.
///
/// The `me/tracks` endpoint returns a plain paginated payload (no wrapper
/// key); items arrive newest-first and that order is preserved. The
/// form-urlencoded content type matches what the provider historically
/// expected on this endpoint.
pub async fn saved_tracks(
    client: &ApiClient,
    progress: Option<&ProgressBar>,
) -> Result<Vec<SavedTrack>, FetchError> {
    client
        .get_all_pages(
            "me/tracks",
            "application/x-www-form-urlencoded",
            &[],
            None,
            progress,
        )
        .await
}

/// Retrieves the user's top tracks for one time window, across all pages.
///
/// The `time_range` query parameter only travels on the first request; the
/// provider's `next` URLs carry it onward. Response order is the provider's
/// ranking and becomes the 1-based rank downstream.
pub async fn top_tracks(
    client: &ApiClient,
    term: TimeRange,
    progress: Option<&ProgressBar>,
) -> Result<Vec<Track>, FetchError> {
    let time_range = term.to_string();
    client
        .get_all_pages(
            "me/top/tracks",
            "application/json",
            &[("time_range", time_range.as_str())],
            None,
            progress,
        )
        .await
}
