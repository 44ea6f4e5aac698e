use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{api, error, types::AuthCallbackState};

/// Serves the OAuth callback endpoints for one authorization flow.
///
/// Runs until the process ends; the auth flow polls the shared state for
/// the delivered code and exits on its own schedule.
pub async fn start_api_server(state: Arc<Mutex<AuthCallbackState>>, addr: String) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(state)));

    let addr = match SocketAddr::from_str(&addr) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind callback server on {}: {}", addr, e),
    };
    if let Err(e) = axum::serve(listener, app).await {
        error!("Callback server error: {}", e);
    }
}
