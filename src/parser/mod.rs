//! # Text Parser Module
//!
//! Recovers structured tracks from pasted, free-form playlist text. The work is
//! split into small pure stages that can be tested on their own:
//!
//! ```text
//! raw text
//!    ↓ segment     candidate lines (newlines, ';' or '•' fallback)
//!    ↓ line        title / artist / album per line (dash, tab, pipe, "by", comma)
//!    ↓ disambiguate  which fragment is the title
//!    ↓ header      optional playlist name in the first line
//! PlaylistManifest
//! ```
//!
//! Nothing here touches the network or shared state. A line that cannot be
//! read is dropped; only an empty result is reported as an error.

mod disambiguate;
mod header;
mod line;
mod normalize;
mod segment;

pub use disambiguate::{
    ArtistScore, Disambiguation, FragmentScore, TITLE_HINT_KEYWORDS, TitleScore, TitleSide,
    disambiguate, matched_keywords,
};
pub use header::{PlaylistHeader, derive_header};
pub use line::{LineFormat, ParsedTrack, parse_track_line, strip_list_prefix};
pub use normalize::normalize_field;
pub use segment::segment_lines;

use tracing::debug;

use crate::{
    error::{IngestError, TrackSource},
    types::{DEFAULT_PLAYLIST_NAME, PlaylistManifest, Track},
};

/// Parses pasted text into a playlist manifest.
///
/// # Errors
///
/// - `EmptyInput` if the text is blank
/// - `NoTracksFound` if no line could be read as a track
pub fn parse_playlist_text(raw: &str) -> Result<PlaylistManifest, IngestError> {
    let lines = segment_lines(raw);
    if lines.is_empty() {
        return Err(IngestError::EmptyInput);
    }

    let parsed: Vec<Option<ParsedTrack>> = lines.iter().map(|l| parse_track_line(l)).collect();
    let header = derive_header(&lines, &parsed);

    let tracks: Vec<Track> = parsed
        .into_iter()
        .skip(header.skip)
        .flatten()
        .enumerate()
        .map(|(id, p)| Track::new(id, p.title, p.artist, p.album))
        .collect();

    debug!(
        lines = lines.len(),
        tracks = tracks.len(),
        header = header.skip,
        "parsed playlist text"
    );

    if tracks.is_empty() {
        return Err(IngestError::NoTracksFound {
            source_kind: TrackSource::Text,
        });
    }

    Ok(PlaylistManifest {
        name: header
            .name
            .unwrap_or_else(|| DEFAULT_PLAYLIST_NAME.to_string()),
        tracks,
    })
}
