//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API that the
//! dashboard is built on: the OAuth 2.0 authorization-code flow and the
//! paginated resource retrieval the derived views consume.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 authorization code)
//!     ├── Generic Client (pagination, wrapper unwrapping)
//!     ├── Track Operations (liked tracks, top tracks)
//!     └── Artist Operations (followed, by-id batches)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! [`auth`] implements the authorization-code flow with a client secret:
//! a pluggable [`auth::AuthCodeProvider`] strategy obtains the one-time
//! code (browser redirect with a local callback server, or a pasted code),
//! and the code is exchanged at the token endpoint using HTTP Basic
//! authentication built from the client credentials.
//!
//! [`client`] implements the generic retrieval loop shared by every
//! resource: authenticated GETs, optional unwrapping of container objects,
//! and pagination by following the provider-supplied `next` URL until it is
//! absent. The first request carries the caller's query parameters; all
//! follow-up requests carry none.
//!
//! [`tracks`] and [`artists`] are thin endpoint wrappers over the client:
//! `me/tracks`, `me/top/tracks` per time window, `me/following`, and the
//! batched `artists?ids=` lookup (at most 50 IDs per request).
//!
//! ## Error Handling Philosophy
//!
//! Everything network-related is fatal by design. This is a single-user
//! interactive session: a failed token exchange or resource fetch aborts
//! the run and nothing is rendered. There is no retry, no backoff, and no
//! partial dashboard. The only locally recovered conditions are data-shape
//! ones (a missing image variant falls back to a placeholder URL), which
//! are handled in the views layer.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - code exchange and token refresh
//! - `GET /me/tracks` - liked tracks, paginated
//! - `GET /me/top/tracks` - top tracks, paginated, `time_range` query
//! - `GET /me/following?type=artist` - followed artists, wrapped page
//! - `GET /artists?ids=…` - full artist objects, wrapped, ≤50 per call
//!
//! ## Thread Safety
//!
//! All operations are async and sequential; the bearer token is the only
//! shared value and is read-only once obtained.

pub mod artists;
pub mod auth;
pub mod client;
pub mod tracks;
