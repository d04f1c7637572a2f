use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Name used when the input carries no playlist name.
pub const DEFAULT_PLAYLIST_NAME: &str = "Imported Playlist";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackStatus {
    Pending,
    Matching,
    Matched,
    Failed,
}

impl std::fmt::Display for TrackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TrackStatus::Pending => "pending",
            TrackStatus::Matching => "matching",
            TrackStatus::Matched => "matched",
            TrackStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: usize,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub status: TrackStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl Track {
    pub fn new(id: usize, title: String, artist: String, album: String) -> Self {
        Self {
            id,
            title,
            artist,
            album,
            status: TrackStatus::Pending,
            confidence: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistManifest {
    pub name: String,
    pub tracks: Vec<Track>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub status: String,
    pub confidence: String,
}

impl From<&Track> for TrackTableRow {
    fn from(track: &Track) -> Self {
        TrackTableRow {
            position: track.id + 1,
            title: track.title.clone(),
            artist: track.artist.clone(),
            album: track.album.clone(),
            status: track.status.to_string(),
            confidence: track
                .confidence
                .map(|c| format!("{:.2}", c))
                .unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
pub struct CatalogPlaylistRow {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
}

/// Full playlist object as returned for `GET /playlists/{id}` with a field projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistEnvelope {
    #[serde(default)]
    pub name: Option<String>,
    pub tracks: TracksPage,
}

/// A page of playlist items, either nested under `tracks` or returned bare by a `next` URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TracksPage {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    #[serde(default)]
    pub next: Option<String>,
}

/// Shape of a follow-up page. The envelope is tried first since a bare
/// page never carries `tracks`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PlaylistPage {
    Envelope(PlaylistEnvelope),
    Page(TracksPage),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    #[serde(default)]
    pub track: Option<RemoteTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteTrack {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub artists: Vec<RemoteArtist>,
    #[serde(default)]
    pub album: Option<RemoteAlbum>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteArtist {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteAlbum {
    #[serde(default)]
    pub name: Option<String>,
}
