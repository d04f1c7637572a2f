use std::sync::LazyLock;

use regex::Regex;

use super::normalize::normalize_field;

#[allow(clippy::expect_used)]
static PLAYLIST_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^playlist\s*[:\-]\s*(.+)$").expect("playlist header regex is valid")
});

/// Name found at the top of a paste and how many leading lines it occupies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaylistHeader {
    pub name: Option<String>,
    pub skip: usize,
}

/// Looks for a playlist name in the first line.
///
/// `parsed[i]` tells whether `lines[i]` was read as a track. An explicit
/// `Playlist: <name>` line always wins. Otherwise an unreadable first line
/// followed by at least one track is taken as a free-text title.
pub fn derive_header<T>(lines: &[String], parsed: &[Option<T>]) -> PlaylistHeader {
    let Some(first) = lines.first() else {
        return PlaylistHeader::default();
    };

    if let Some(caps) = PLAYLIST_HEADER.captures(first) {
        let name = caps
            .get(1)
            .map(|m| normalize_field(m.as_str()))
            .filter(|name| !name.is_empty());
        return PlaylistHeader { name, skip: 1 };
    }

    let first_failed = parsed.first().is_some_and(Option::is_none);
    let later_parsed = parsed.iter().skip(1).any(Option::is_some);

    if first_failed && later_parsed {
        let name = Some(normalize_field(first)).filter(|name| !name.is_empty());
        return PlaylistHeader { name, skip: 1 };
    }

    PlaylistHeader::default()
}
