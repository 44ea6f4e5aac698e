//! Token lifecycle management.
//!
//! The only thing this application persists between sessions is the OAuth
//! token; every track, artist, and album is re-fetched live on each run.

mod auth;

pub use auth::TokenManager;
