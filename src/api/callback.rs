use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{types::AuthCallbackState, warning};

/// Receives the provider redirect carrying the authorization code.
///
/// The `state` parameter must match the one generated when the flow started;
/// a mismatched or missing state is rejected so a stray redirect cannot
/// inject a code. On success the code is stored for the waiting auth flow
/// and the user is told to close the window.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<AuthCallbackState>>>,
) -> Html<&'static str> {
    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    let mut session = shared_state.lock().await;

    match params.get("state") {
        Some(returned) if *returned == session.expected_state => {}
        _ => {
            warning!("State parameter mismatch on OAuth callback.");
            return Html("<h4>State mismatch. Please restart the authorization flow.</h4>");
        }
    }

    session.code = Some(code.clone());
    Html("<h2>Authorization received.</h2><p>You can close this browser window.</p>")
}
