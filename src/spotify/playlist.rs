use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{
    error::{IngestError, TrackSource},
    ingest::PlaylistSource,
    management::{CredentialCache, CredentialProvider},
    parser::normalize_field,
    types::{
        DEFAULT_PLAYLIST_NAME, PlaylistEnvelope, PlaylistItem, PlaylistManifest, PlaylistPage,
        Track,
    },
    utils::decode,
};

/// Field projection for the playlist request: the name plus, per item, the
/// track title, artist names and album name.
pub const PLAYLIST_FIELDS: &str =
    "name,tracks.items(track(name,artists(name),album(name))),tracks.next";

/// Fetches a playlist and every page of its tracks.
///
/// The first request asks for the playlist name and first page. As long as a
/// response carries a `next` URL that exact URL is requested and its items are
/// appended. Follow-up responses may be a full playlist object or a bare
/// `{ items, next }` page; a name seen after the first one is ignored. Pages
/// are fetched strictly one after another.
///
/// Any failed request aborts the whole fetch and nothing fetched so far is
/// returned. Items without a title or an artist are dropped and the remaining
/// tracks are numbered from 0.
///
/// # Errors
///
/// - `RemoteNotFound` for HTTP 404
/// - `RemoteAccessDenied` for HTTP 401 / 403
/// - `RemoteTransportFailure` for network errors, other statuses or
///   undecodable bodies
/// - `NoTracksFound` if no usable track remains
pub async fn fetch_playlist(
    http: &Client,
    api_url: &str,
    market: &str,
    playlist_id: &str,
    token: &str,
) -> Result<PlaylistManifest, IngestError> {
    let url = format!(
        "{uri}/playlists/{id}",
        uri = api_url.trim_end_matches('/'),
        id = playlist_id
    );

    let response = http
        .get(&url)
        .query(&[("market", market), ("fields", PLAYLIST_FIELDS)])
        .bearer_auth(token)
        .send()
        .await
        .map_err(IngestError::transport)?;

    let first: PlaylistEnvelope = decode(response, playlist_id).await?;

    let mut name = first.name.filter(|n| !n.trim().is_empty());
    let mut items: Vec<PlaylistItem> = first.tracks.items;
    let mut next = first.tracks.next;
    let mut pages = 1usize;

    while let Some(next_url) = next.take() {
        debug!(page = pages + 1, url = %next_url, "following continuation cursor");

        let response = http
            .get(&next_url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(IngestError::transport)?;

        let page = match decode::<PlaylistPage>(response, playlist_id).await? {
            PlaylistPage::Envelope(envelope) => {
                if name.is_none() {
                    name = envelope.name.filter(|n| !n.trim().is_empty());
                }
                envelope.tracks
            }
            PlaylistPage::Page(page) => page,
        };

        items.extend(page.items);
        next = page.next;
        pages += 1;
    }

    let fetched = items.len();
    let tracks: Vec<Track> = items
        .into_iter()
        .filter_map(item_fields)
        .enumerate()
        .map(|(id, (title, artist, album))| Track::new(id, title, artist, album))
        .collect();

    debug!(
        playlist = playlist_id,
        pages,
        fetched,
        kept = tracks.len(),
        "fetched remote playlist"
    );

    if tracks.is_empty() {
        return Err(IngestError::NoTracksFound {
            source_kind: TrackSource::Remote,
        });
    }

    Ok(PlaylistManifest {
        name: name
            .map(|n| normalize_field(&n))
            .unwrap_or_else(|| DEFAULT_PLAYLIST_NAME.to_string()),
        tracks,
    })
}

fn item_fields(item: PlaylistItem) -> Option<(String, String, String)> {
    let track = item.track?;

    let title = normalize_field(track.name.as_deref().unwrap_or_default());
    let artist = track
        .artists
        .iter()
        .filter_map(|a| a.name.as_deref())
        .map(normalize_field)
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    if title.is_empty() || artist.is_empty() {
        return None;
    }

    let album = track
        .album
        .and_then(|a| a.name)
        .map(|n| normalize_field(&n))
        .unwrap_or_default();

    Some((title, artist, album))
}

/// Remote playlist source backed by the Spotify Web API.
pub struct SpotifySource {
    http: Client,
    api_url: String,
    market: String,
    credentials: Arc<CredentialCache>,
    provider: Arc<dyn CredentialProvider>,
}

impl SpotifySource {
    pub fn new(
        http: Client,
        api_url: String,
        market: String,
        credentials: Arc<CredentialCache>,
        provider: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            http,
            api_url,
            market,
            credentials,
            provider,
        }
    }
}

#[async_trait]
impl PlaylistSource for SpotifySource {
    async fn fetch(&self, playlist_id: &str) -> Result<PlaylistManifest, IngestError> {
        let token = self.credentials.access_token(&self.provider).await?;
        fetch_playlist(&self.http, &self.api_url, &self.market, playlist_id, &token).await
    }
}
