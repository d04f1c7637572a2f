//! Ingestion entry point.
//!
//! Routes raw input to the right path: playlist links are fetched remotely
//! through a [`PlaylistSource`], everything else is parsed as pasted text.
//! Both paths produce the same [`PlaylistManifest`].

use async_trait::async_trait;
use tracing::debug;

use crate::{
    error::IngestError,
    link::{LinkKind, classify_link, resolve_playlist_id},
    parser::parse_playlist_text,
    types::PlaylistManifest,
};

/// Something that can turn a remote playlist id into a manifest.
#[async_trait]
pub trait PlaylistSource: Send + Sync {
    async fn fetch(&self, playlist_id: &str) -> Result<PlaylistManifest, IngestError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestInput {
    /// Pasted text, which may itself be a single playlist link.
    Text(String),
    /// A link, URI or bare id the user explicitly asked to import.
    Remote(String),
    /// An image (screenshot of a playlist). Always rejected.
    Image { file_name: String },
}

/// Turns any supported input into a playlist manifest.
///
/// # Errors
///
/// Any [`IngestError`] kind; remote failures come straight from `source`.
pub async fn ingest(
    input: &IngestInput,
    source: &dyn PlaylistSource,
) -> Result<PlaylistManifest, IngestError> {
    match input {
        IngestInput::Image { file_name } => {
            debug!(file = %file_name, "rejecting image input");
            Err(IngestError::UnsupportedInputKind {
                kind: "image".to_string(),
            })
        }
        IngestInput::Remote(reference) => {
            let id = resolve_playlist_id(reference)?;
            source.fetch(&id).await
        }
        IngestInput::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(IngestError::EmptyInput);
            }

            match classify_link(trimmed) {
                LinkKind::Playlist(id) => {
                    debug!(playlist = %id, "text is a playlist link");
                    source.fetch(&id).await
                }
                LinkKind::Unsupported(url) => Err(IngestError::UnsupportedLink { url }),
                LinkKind::NotALink => parse_playlist_text(trimmed),
            }
        }
    }
}

/// Source used when remote access is not configured; every fetch fails
/// with the stored reason.
pub struct UnavailableSource(pub IngestError);

#[async_trait]
impl PlaylistSource for UnavailableSource {
    async fn fetch(&self, playlist_id: &str) -> Result<PlaylistManifest, IngestError> {
        debug!(playlist = %playlist_id, "remote source unavailable");
        Err(self.0.clone())
    }
}
