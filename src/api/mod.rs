//! # API Module
//!
//! HTTP endpoints for the local callback server used during the OAuth
//! authorization flow.
//!
//! ## Endpoints
//!
//! - [`callback`] - Receives the redirect from Spotify's authorization
//!   server, verifies the `state` parameter, and deposits the one-time
//!   authorization code into the shared flow state. The token exchange
//!   itself happens in the auth flow, not here, so the code-acquisition
//!   strategy stays pluggable.
//! - [`health`] - Health check returning application status and version.
//!
//! ## Architecture
//!
//! Built on the [Axum](https://docs.rs/axum) web framework; each endpoint is
//! an async handler wired into the router in [`crate::server`]. The server
//! only ever runs for the duration of one authorization flow.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
