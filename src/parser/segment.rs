use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::expect_used)]
static SEMICOLON_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*;\s*").expect("semicolon regex is valid"));

const BULLET: char = '•';

/// Splits pasted text into candidate track lines.
///
/// Lines are split on any line ending, trimmed, and empty ones dropped. A
/// paste that collapses to a single line is re-split on `;`, then on `•`,
/// whichever first yields more than one part. Blank input gives an empty list.
pub fn segment_lines(raw: &str) -> Vec<String> {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");

    let lines: Vec<String> = unified
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    if lines.len() != 1 {
        return lines;
    }

    let single = &lines[0];

    let by_semicolon = non_empty_parts(SEMICOLON_SPLIT.split(single));
    if by_semicolon.len() > 1 {
        return by_semicolon;
    }

    let by_bullet = non_empty_parts(single.split(BULLET));
    if by_bullet.len() > 1 {
        return by_bullet;
    }

    lines
}

fn non_empty_parts<'a>(parts: impl Iterator<Item = &'a str>) -> Vec<String> {
    parts
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}
