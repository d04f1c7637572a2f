//! Playlist link recognition.
//!
//! Decides whether a piece of input is itself a shareable Spotify playlist
//! reference and pulls out its identifier. Two forms are recognized:
//!
//! - the client URI `spotify:playlist:<id>`
//! - a web URL on `*.spotify.com` whose path is `/playlist/<id>` or
//!   `/embed/playlist/<id>`; the scheme may be left off (`open.spotify.com/...`)
//!
//! Any other URL is reported as unsupported so it is not silently parsed as a
//! track list.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use url::Url;

use crate::error::IngestError;

const SERVICE_DOMAIN: &str = "spotify.com";

#[allow(clippy::expect_used)]
static URI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^spotify:playlist:([A-Za-z0-9]+)$").expect("playlist URI regex is valid")
});

#[allow(clippy::expect_used)]
static PATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/(?:embed/)?playlist/([A-Za-z0-9]+)/?$").expect("playlist path regex is valid")
});

#[allow(clippy::expect_used)]
static SCHEME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("scheme regex is valid"));

#[allow(clippy::expect_used)]
static ANY_SCHEME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").expect("generic scheme regex is valid")
});

#[allow(clippy::expect_used)]
static BARE_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // host with at least one dot, followed by a path
    Regex::new(r"(?i)^[a-z0-9-]+(?:\.[a-z0-9-]+)+/\S*$").expect("bare URL regex is valid")
});

#[allow(clippy::expect_used)]
static BARE_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{22}$").expect("bare id regex is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkKind {
    /// A recognized playlist reference, carrying its identifier.
    Playlist(String),
    /// A URL that does not point at a playlist.
    Unsupported(String),
    /// Not a link at all; the caller should parse it as text.
    NotALink,
}

/// Classifies trimmed input as a playlist link, another URL, or plain text.
pub fn classify_link(input: &str) -> LinkKind {
    let candidate = input.trim();
    if candidate.is_empty() || candidate.contains(char::is_whitespace) {
        return LinkKind::NotALink;
    }

    if let Some(caps) = URI_PATTERN.captures(candidate) {
        return LinkKind::Playlist(caps[1].to_string());
    }

    let absolute = if SCHEME_PATTERN.is_match(candidate) {
        candidate.to_string()
    } else if ANY_SCHEME_PATTERN.is_match(candidate) {
        // ftp://, file:// and friends never name a playlist
        debug!(url = %candidate, "URL scheme is not http(s)");
        return LinkKind::Unsupported(candidate.to_string());
    } else if BARE_URL_PATTERN.is_match(candidate) {
        format!("https://{candidate}")
    } else {
        return LinkKind::NotALink;
    };

    match playlist_id_from_url(&absolute) {
        Some(id) => LinkKind::Playlist(id),
        None => {
            debug!(url = %absolute, "URL is not a playlist link");
            LinkKind::Unsupported(candidate.to_string())
        }
    }
}

fn playlist_id_from_url(absolute: &str) -> Option<String> {
    let url = Url::parse(absolute).ok()?;
    let host = url.host_str()?.to_ascii_lowercase();

    let on_service = host == SERVICE_DOMAIN || host.ends_with(&format!(".{SERVICE_DOMAIN}"));
    if !on_service {
        return None;
    }

    PATH_PATTERN
        .captures(url.path())
        .map(|caps| caps[1].to_string())
}

/// Resolves explicit remote input (link, URI or bare id) to a playlist id.
///
/// # Errors
///
/// - `EmptyInput` for blank input
/// - `UnsupportedLink` for anything that is not a playlist reference
pub fn resolve_playlist_id(input: &str) -> Result<String, IngestError> {
    let candidate = input.trim();
    if candidate.is_empty() {
        return Err(IngestError::EmptyInput);
    }

    match classify_link(candidate) {
        LinkKind::Playlist(id) => Ok(id),
        LinkKind::Unsupported(url) => Err(IngestError::UnsupportedLink { url }),
        LinkKind::NotALink if BARE_ID_PATTERN.is_match(candidate) => Ok(candidate.to_string()),
        LinkKind::NotALink => Err(IngestError::UnsupportedLink {
            url: candidate.to_string(),
        }),
    }
}
