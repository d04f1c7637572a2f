//! # Spotify Integration Module
//!
//! This module is the importer's connection to the Spotify Web API. It turns a
//! playlist identifier into a [`PlaylistManifest`](crate::types::PlaylistManifest)
//! by following the API's cursor pagination, and it obtains the app token that
//! authorizes those requests.
//!
//! ## Architecture
//!
//! ```text
//! ingest (link recognized)
//!          ↓
//! SpotifySource ── CredentialCache ── ClientCredentialsProvider
//!          ↓                                   ↓
//! fetch_playlist                         POST /api/token
//!          ↓
//! GET /playlists/{id} → next → next → ... (sequential)
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - client-credentials token acquisition
//! - [`playlist`] - paginated playlist fetch and the [`SpotifySource`] adapter
//!
//! ## Error Handling
//!
//! Remote failures are never retried here. Status codes are mapped onto
//! [`IngestError`](crate::error::IngestError) kinds: 404 becomes
//! `RemoteNotFound`, 401/403 become `RemoteAccessDenied` and anything else is a
//! `RemoteTransportFailure`. A failure on any page discards the pages fetched
//! before it.
//!
//! ## API Coverage
//!
//! - `GET /playlists/{playlist_id}` - playlist name and first track page
//! - `GET <next>` - follow-up pages, URL taken verbatim from the response
//! - `POST /api/token` - client-credentials grant

pub mod auth;
pub mod playlist;

pub use auth::ClientCredentialsProvider;
pub use playlist::{SpotifySource, fetch_playlist};
