//! Error types for playlist ingestion.
//!
//! Every failure the engine reports is one of the [`IngestError`] kinds. The
//! `Display` output is meant for logs; [`IngestError::user_message`] is the
//! presentation layer the CLI shows to people.

use thiserror::Error;

/// Fixed message shown when an image is handed to the ingester.
pub const IMAGE_UNSUPPORTED_MESSAGE: &str =
    "Image import is not supported. Paste the track list as text instead.";

/// Where an empty track list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackSource {
    Text,
    Remote,
}

impl std::fmt::Display for TrackSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackSource::Text => write!(f, "pasted text"),
            TrackSource::Remote => write!(f, "remote playlist"),
        }
    }
}

/// Errors that can occur while ingesting a playlist.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IngestError {
    /// Blank paste or blank identifier
    #[error("input is empty")]
    EmptyInput,

    /// Input is a URL, but not one that names a playlist
    #[error("unsupported link '{url}'")]
    UnsupportedLink { url: String },

    /// Nothing usable survived parsing or fetching
    #[error("no tracks found in {source_kind}")]
    NoTracksFound { source_kind: TrackSource },

    /// 404 from the remote catalog
    #[error("playlist '{id}' was not found")]
    RemoteNotFound { id: String },

    /// 401/403 from the remote catalog
    #[error("access to playlist '{id}' was denied (HTTP {status})")]
    RemoteAccessDenied { id: String, status: u16 },

    /// Network failure, undecodable body or any other non-success status
    #[error("remote request failed: {reason}")]
    RemoteTransportFailure { reason: String },

    /// Structurally unusable input, such as an image
    #[error("unsupported input kind: {kind}")]
    UnsupportedInputKind { kind: String },

    /// The access token could not be obtained
    #[error("could not obtain an access token: {reason}")]
    CredentialUnavailable { reason: String },

    /// A required configuration value is not set
    #[error("missing configuration value {key}")]
    MissingConfig { key: String },
}

impl IngestError {
    /// Builds a `RemoteTransportFailure` from anything displayable.
    #[must_use]
    pub fn transport(reason: impl std::fmt::Display) -> Self {
        Self::RemoteTransportFailure {
            reason: reason.to_string(),
        }
    }

    /// Maps an HTTP status of a failed remote call to an error kind.
    #[must_use]
    pub fn from_status(id: &str, status: u16) -> Self {
        match status {
            404 => Self::RemoteNotFound { id: id.to_string() },
            401 | 403 => Self::RemoteAccessDenied {
                id: id.to_string(),
                status,
            },
            other => Self::RemoteTransportFailure {
                reason: format!("unexpected HTTP status {other} for '{id}'"),
            },
        }
    }

    /// Human-readable text with a hint on how to recover.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyInput => {
                "Nothing to import. Paste a track list or a playlist link.".to_string()
            }
            Self::UnsupportedLink { url } => format!(
                "The link {url} is not a playlist link.\n  Suggestion: share the playlist and copy its link (open.spotify.com/playlist/...)"
            ),
            Self::NoTracksFound { source_kind } => format!(
                "No tracks could be read from the {source_kind}.\n  Suggestion: use one track per line, e.g. \"Title - Artist\""
            ),
            Self::RemoteNotFound { id } => format!(
                "Playlist {id} does not exist or is private.\n  Suggestion: check the link or make the playlist public"
            ),
            Self::RemoteAccessDenied { id, status } => format!(
                "Access to playlist {id} was denied (HTTP {status}).\n  Suggestion: check the client credentials in your .env file"
            ),
            Self::RemoteTransportFailure { reason } => format!(
                "Could not reach the music service: {reason}\n  Suggestion: check your connection and try again"
            ),
            Self::UnsupportedInputKind { kind } if kind == "image" => {
                IMAGE_UNSUPPORTED_MESSAGE.to_string()
            }
            Self::UnsupportedInputKind { kind } => {
                format!("Input of kind {kind} cannot be imported.")
            }
            Self::CredentialUnavailable { reason } => format!(
                "Could not sign in to the music service: {reason}\n  Suggestion: check SPOTIFY_API_AUTH_CLIENT_ID and SPOTIFY_API_AUTH_CLIENT_SECRET"
            ),
            Self::MissingConfig { key } => format!(
                "{key} is not set.\n  Suggestion: add it to your environment or the tracklift .env file"
            ),
        }
    }
}
