use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::{disambiguate::disambiguate, normalize::normalize_field};

#[allow(clippy::expect_used)]
static LIST_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    // "1. ", "02) ", "3- ", "4: " or a leading bullet/dash/plus marker
    Regex::new(r"^(?:\d+[.)\-:]\s*|[•·*+\-–—]\s*)").expect("list prefix regex is valid")
});

#[allow(clippy::expect_used)]
static BY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // greedy head so "Stand by Me by Ben E. King" splits at the last "by"
    Regex::new(r"(?i)^(.+)\s+\bby\b\s+(.+)$").expect("by regex is valid")
});

#[allow(clippy::expect_used)]
static TAB_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\t+").expect("tab regex is valid"));

#[allow(clippy::expect_used)]
static DASH_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" [-–—] ").expect("dash regex is valid"));

#[allow(clippy::expect_used)]
static PIPE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\|\s*").expect("pipe regex is valid"));

/// Which strategy recovered the fields of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFormat {
    By,
    Tab,
    Dash,
    Pipe,
    Comma,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTrack {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub format: LineFormat,
}

/// Removes a list number ("1.", "2)") or bullet marker from the start of a line.
pub fn strip_list_prefix(line: &str) -> &str {
    let trimmed = line.trim();
    match LIST_PREFIX.find(trimmed) {
        Some(m) => &trimmed[m.end()..],
        None => trimmed,
    }
}

/// Turns one candidate line into a title/artist/album guess.
///
/// Strategies are tried in a fixed order (`X by Y`, tabs, spaced dash, pipe,
/// single comma) and the first that yields usable fields wins. Returns `None`
/// for lines none of them can read.
pub fn parse_track_line(line: &str) -> Option<ParsedTrack> {
    let body = strip_list_prefix(line);

    if let Some(parsed) = parse_by(body) {
        return Some(parsed);
    }

    let attempts: [(LineFormat, Option<Vec<String>>); 4] = [
        (
            LineFormat::Tab,
            body.contains('\t')
                .then(|| split_parts(TAB_SPLIT.split(body)))
                .flatten(),
        ),
        (LineFormat::Dash, split_parts(DASH_SPLIT.split(body))),
        (LineFormat::Pipe, split_parts(PIPE_SPLIT.split(body))),
        (LineFormat::Comma, split_comma(body)),
    ];

    let parsed = attempts
        .into_iter()
        .find_map(|(format, parts)| parts.and_then(|p| from_parts(p, format)));

    if parsed.is_none() {
        trace!(line = %body, "line not recognised as a track");
    }
    parsed
}

fn parse_by(body: &str) -> Option<ParsedTrack> {
    let caps = BY_PATTERN.captures(body)?;
    let title = normalize_field(caps.get(1)?.as_str());
    let artist = normalize_field(caps.get(2)?.as_str());

    if title.is_empty() || artist.is_empty() {
        return None;
    }

    Some(ParsedTrack {
        title,
        artist,
        album: String::new(),
        format: LineFormat::By,
    })
}

/// Normalizes the pieces of a split, keeping it only if two or more remain.
fn split_parts<'a>(parts: impl Iterator<Item = &'a str>) -> Option<Vec<String>> {
    let parts: Vec<String> = parts
        .map(normalize_field)
        .filter(|part| !part.is_empty())
        .collect();

    (parts.len() >= 2).then_some(parts)
}

fn split_comma(body: &str) -> Option<Vec<String>> {
    let raw: Vec<&str> = body.split(',').collect();
    if raw.len() != 2 {
        return None;
    }
    split_parts(raw.into_iter())
}

fn from_parts(parts: Vec<String>, format: LineFormat) -> Option<ParsedTrack> {
    let mut parts = parts.into_iter();
    let first = parts.next()?;
    let second = parts.next()?;
    let album = parts.collect::<Vec<_>>().join(" - ");

    let resolved = disambiguate(&first, &second);
    let title = normalize_field(&resolved.title);
    let artist = normalize_field(&resolved.artist);

    if title.is_empty() || artist.is_empty() {
        return None;
    }

    Some(ParsedTrack {
        title,
        artist,
        album,
        format,
    })
}
