//! Configuration management for the Spotify listening dashboard.
//!
//! This module handles loading configuration values from environment
//! variables and `.env` files and collecting them into a single [`Config`]
//! value. The pipeline entry points receive that value explicitly instead of
//! reading the environment themselves, so every endpoint URL and credential
//! has exactly one source.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults for the public Spotify endpoints and scope

use std::{env, path::PathBuf};

/// The capability names requested during authorization, space-separated.
///
/// Matches the read-only scope set the dashboard needs; overridable through
/// `SPOTIFY_API_AUTH_SCOPE`.
pub const DEFAULT_SCOPE: &str = "user-read-private user-read-email playlist-read-private user-follow-read user-top-read user-read-recently-played user-library-read";

const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from `spotidash/.env` under the platform-specific
/// local data directory. This allows users to store credentials without
/// hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spotidash/.env`
/// - macOS: `~/Library/Application Support/spotidash/.env`
/// - Windows: `%LOCALAPPDATA%/spotidash/.env`
///
/// A missing `.env` file is not an error; configuration may come entirely
/// from process environment variables.
///
/// # Errors
///
/// This function will return an error if the parent directory cannot be
/// created or the `.env` file exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotidash/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// All external-interface settings for one session, resolved once at startup.
///
/// Carries the OAuth client credentials, the provider endpoints, and the
/// local callback server address. Passed by reference into the auth flow and
/// the retrieval pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the local OAuth callback server binds to.
    pub server_addr: String,
    /// Spotify application client ID.
    pub client_id: String,
    /// Spotify application client secret, used for HTTP Basic auth at the
    /// token endpoint.
    pub client_secret: String,
    /// Redirect URI registered with the Spotify application.
    pub redirect_uri: String,
    /// Space-separated OAuth scope string.
    pub scope: String,
    /// Authorization endpoint the user's browser is sent to.
    pub auth_url: String,
    /// Token exchange endpoint.
    pub token_url: String,
    /// Web API base URL.
    pub api_url: String,
}

impl Config {
    /// Assembles a [`Config`] from the environment.
    ///
    /// The client ID, client secret, and redirect URI are required; the
    /// endpoint URLs, scope, and callback server address fall back to the
    /// public Spotify defaults.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing required variable.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            server_addr: env::var("SERVER_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string()),
            client_id: required("SPOTIFY_API_AUTH_CLIENT_ID")?,
            client_secret: required("SPOTIFY_API_AUTH_CLIENT_SECRET")?,
            redirect_uri: required("SPOTIFY_API_REDIRECT_URI")?,
            scope: env::var("SPOTIFY_API_AUTH_SCOPE").unwrap_or_else(|_| DEFAULT_SCOPE.to_string()),
            auth_url: env::var("SPOTIFY_API_AUTH_URL")
                .unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string()),
            token_url: env::var("SPOTIFY_API_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
            api_url: env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("{} must be set", name))
}
