//! # CLI Module
//!
//! The user-facing command layer of the dashboard. Each command loads the
//! cached token, drives the Spotify integration layer, reshapes the results
//! through [`crate::views`], and renders terminal tables.
//!
//! ## Commands
//!
//! - [`auth`] - OAuth 2.0 authorization-code flow, browser or manual
//! - [`dashboard`] - the full dashboard: liked-artist summary, top tracks
//!   for all three time windows, and follow/unfollow recommendations
//! - [`artists`] - liked-artist summary table only
//! - [`top`] - top-track tables, one or all time windows
//! - [`recommend`] - follow/unfollow recommendations only
//!
//! ## Data Flow
//!
//! 1. **Token**: load the cached token, refreshing when close to expiry;
//!    a missing cache points the user at `spotidash auth`
//! 2. **Fetch**: drain every page of each needed resource, with a spinner
//!    reporting page progress
//! 3. **Reshape**: explode, group, and join in the views layer
//! 4. **Render**: `tabled` tables on stdout
//!
//! Any fetch failure aborts the command via `error!` before anything is
//! rendered; there are no partial dashboards.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{config::Config, error, management::TokenManager, spotify::client::ApiClient};

mod artists;
mod auth;
mod dashboard;
mod recommend;
mod top;

pub use artists::artists;
pub use auth::auth;
pub use dashboard::dashboard;
pub use recommend::recommend;
pub use top::top;

/// Spinner used while a fetch is draining pages.
pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

/// Builds the authenticated API client from the cached token.
///
/// Exits with a pointer to `spotidash auth` when no usable token exists.
pub(crate) async fn api_client(config: &Config) -> ApiClient {
    let mut token_mgr = match TokenManager::load(config.clone()).await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run spotidash auth\n Error: {}",
                e
            );
        }
    };

    let token = token_mgr.get_valid_token().await;
    match ApiClient::new(config, token) {
        Ok(client) => client,
        Err(e) => error!("Failed to initialize API client: {}", e),
    }
}
