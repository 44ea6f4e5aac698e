use std::sync::Arc;

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use rand::{Rng, distr::Alphanumeric};
use reqwest::{Client, header::AUTHORIZATION};
use serde_json::Value;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::Mutex,
};

use crate::{
    Res,
    config::Config,
    error, info,
    management::TokenManager,
    server::start_api_server,
    spotify::client::REQUEST_TIMEOUT,
    success,
    types::{AuthCallbackState, Token},
    warning,
};

/// How a one-time authorization code is obtained from the user.
///
/// The retrieval pipeline is identical regardless of strategy; only the way
/// the `code` query parameter travels back differs.
pub trait AuthCodeProvider {
    async fn obtain_code(&self, config: &Config) -> Res<String>;
}

/// Interactive strategy: open the authorization URL in the default browser
/// and receive the code on the local callback server.
pub struct BrowserRedirect;

impl AuthCodeProvider for BrowserRedirect {
    async fn obtain_code(&self, config: &Config) -> Res<String> {
        let state_param = generate_state();
        let shared_state = Arc::new(Mutex::new(AuthCallbackState {
            expected_state: state_param.clone(),
            code: None,
        }));

        // start the callback server before the browser can redirect back
        let server_state = Arc::clone(&shared_state);
        let server_addr = config.server_addr.clone();
        tokio::spawn(async move {
            start_api_server(server_state, server_addr).await;
        });

        let auth_url = build_authorize_url(config, &state_param);
        if webbrowser::open(&auth_url).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                auth_url
            )
        }

        match wait_for_code(shared_state).await {
            Some(code) => Ok(code),
            None => Err("authorization timed out or was denied".into()),
        }
    }
}

/// Manual strategy: print the authorization URL and read the redirected-to
/// code from stdin. Useful on machines without a browser hand-off.
pub struct PastedCode;

impl AuthCodeProvider for PastedCode {
    async fn obtain_code(&self, config: &Config) -> Res<String> {
        let auth_url = build_authorize_url(config, &generate_state());
        info!(
            "Open the following URL, authorize the application, then paste the value of the `code` query parameter from the redirect URL:"
        );
        println!("{}", auth_url);

        let mut line = String::new();
        let mut reader = BufReader::new(tokio::io::stdin());
        reader.read_line(&mut line).await?;

        let code = line.trim().to_string();
        if code.is_empty() {
            return Err("no authorization code entered".into());
        }
        Ok(code)
    }
}

/// Runs the complete OAuth 2.0 authorization-code flow.
///
/// 1. The strategy obtains a one-time authorization code.
/// 2. The code is exchanged for a bearer token at the token endpoint.
/// 3. The token is persisted for subsequent commands.
///
/// Every failure is fatal: the user restarts the flow, nothing is rendered
/// from a half-authenticated session.
pub async fn auth<P: AuthCodeProvider>(config: &Config, provider: &P) {
    let code = match provider.obtain_code(config).await {
        Ok(code) => code,
        Err(e) => error!("Authorization failed: {}", e),
    };

    let token = match exchange_code(config, &code).await {
        Ok(token) => token,
        Err(e) => error!("Token exchange failed: {}", e),
    };

    let token_manager = TokenManager::new(token, config.clone());
    if let Err(e) = token_manager.persist().await {
        error!("Failed to save token to cache: {}", e);
    }

    success!("Authentication successful!");
}

/// Constructs the provider authorization URL the user's browser visits.
pub fn build_authorize_url(config: &Config, state: &str) -> String {
    format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}&state={state}",
        auth_url = config.auth_url,
        client_id = config.client_id,
        redirect_uri = config.redirect_uri,
        scope = config.scope,
        state = state
    )
}

/// Random alphanumeric `state` parameter tying a callback to this flow.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Exchanges an authorization code for a bearer token.
///
/// One POST to the token endpoint with HTTP Basic authentication built from
/// `base64(client_id:client_secret)` and the form body
/// `grant_type=authorization_code&code=…&redirect_uri=…`. A non-success
/// status fails the exchange immediately; there is no retry and the caller
/// must not render any data.
pub async fn exchange_code(config: &Config, code: &str) -> Result<Token, String> {
    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| e.to_string())?;

    let res = client
        .post(&config.token_url)
        .header(AUTHORIZATION, basic_auth_header(config))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = res.status();
    if !status.is_success() {
        return Err(format!("token endpoint returned {}", status));
    }

    let json: Value = res.json().await.map_err(|e| e.to_string())?;
    token_from_json(&json)
}

/// `Authorization` header value for the token endpoint.
pub(crate) fn basic_auth_header(config: &Config) -> String {
    let credentials = format!("{}:{}", config.client_id, config.client_secret);
    format!("Basic {}", STANDARD.encode(credentials))
}

/// Reads a token response body into a [`Token`].
///
/// `access_token` is required; refresh responses may omit `refresh_token`
/// and `scope`.
pub(crate) fn token_from_json(json: &Value) -> Result<Token, String> {
    let access_token = json["access_token"]
        .as_str()
        .ok_or_else(|| "token response is missing access_token".to_string())?
        .to_string();

    Ok(Token {
        access_token,
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}

/// Polls the shared callback state until the code arrives or two minutes
/// pass. Runs concurrently with the HTTP server callback handler.
async fn wait_for_code(shared_state: Arc<Mutex<AuthCallbackState>>) -> Option<String> {
    use std::time::{Duration, Instant};

    let max_wait = Duration::from_secs(120);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(code) = &lock.code {
            return Some(code.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}
