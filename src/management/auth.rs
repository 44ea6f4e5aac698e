use std::path::PathBuf;

use chrono::Utc;
use reqwest::{Client, header::AUTHORIZATION};

use crate::{
    config::Config,
    spotify::auth::{basic_auth_header, token_from_json},
    spotify::client::REQUEST_TIMEOUT,
    types::Token,
};

/// Caches the session token on disk and refreshes it proactively.
///
/// The token cache is the CLI's equivalent of a browser session: commands
/// other than `auth` load it instead of re-running the authorization flow.
pub struct TokenManager {
    token: Token,
    config: Config,
}

impl TokenManager {
    pub fn new(token: Token, config: Config) -> Self {
        TokenManager { token, config }
    }

    pub async fn load(config: Config) -> Result<Self, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { token, config })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(Self::token_path(), json)
            .await
            .map_err(|e| e.to_string())
    }

    /// Returns a usable access token, refreshing it first when it is at or
    /// past its expiry window.
    pub async fn get_valid_token(&mut self) -> String {
        if self.is_expired() {
            if let Ok(new_token) = self.refresh().await {
                self.token = new_token;
                let _ = self.persist().await;
            }
        }

        self.token.access_token.clone()
    }

    // refreshed 4 minutes early so in-flight pagination never trips expiry
    fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= self.token.obtained_at + self.token.expires_in - 240
    }

    async fn refresh(&self) -> Result<Token, String> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| e.to_string())?;

        let res = client
            .post(&self.config.token_url)
            .header(AUTHORIZATION, basic_auth_header(&self.config))
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", self.token.refresh_token.as_str()),
            ])
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = res.status();
        if !status.is_success() {
            return Err(format!("token refresh returned {}", status));
        }

        let json: serde_json::Value = res.json().await.map_err(|e| e.to_string())?;
        let mut token = token_from_json(&json)?;
        // the provider may rotate or omit the refresh token, keep the old one
        if token.refresh_token.is_empty() {
            token.refresh_token = self.token.refresh_token.clone();
        }
        Ok(token)
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spotidash/cache/token.json");
        path
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}
