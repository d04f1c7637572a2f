//! Heuristic match confidence.
//!
//! This is NOT a catalog lookup. It guesses, from the shape of a track's
//! fields alone, how likely a search in another catalog is to find it. Use
//! [`super::CatalogClient::search_track`] for an authoritative answer.

use crate::{
    parser::matched_keywords,
    types::{PlaylistManifest, Track, TrackStatus},
};

pub const BASE_CONFIDENCE: f64 = 0.65;
pub const TITLE_LENGTH_BONUS: f64 = 0.10;
pub const ARTIST_LENGTH_BONUS: f64 = 0.10;
pub const ALBUM_BONUS: f64 = 0.05;
pub const KEYWORD_PENALTY: f64 = 0.05;
pub const MIN_CONFIDENCE: f64 = 0.35;
pub const MAX_CONFIDENCE: f64 = 0.95;
pub const MATCH_THRESHOLD: f64 = 0.5;

const MIN_TITLE_CHARS: usize = 4;
const MIN_ARTIST_CHARS: usize = 3;

/// Individual contributions to a confidence value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConfidenceBreakdown {
    pub base: f64,
    pub title_bonus: f64,
    pub artist_bonus: f64,
    pub album_bonus: f64,
    pub keyword_penalty: f64,
}

impl ConfidenceBreakdown {
    /// Sum of all contributions before clamping.
    pub fn raw(&self) -> f64 {
        self.base + self.title_bonus + self.artist_bonus + self.album_bonus - self.keyword_penalty
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchEstimate {
    pub confidence: f64,
    pub match_found: bool,
    pub breakdown: ConfidenceBreakdown,
}

impl MatchEstimate {
    fn none() -> Self {
        MatchEstimate {
            confidence: 0.0,
            match_found: false,
            breakdown: ConfidenceBreakdown::default(),
        }
    }
}

/// Estimates whether `track` is likely to exist in a second catalog.
pub fn estimate_match(track: &Track) -> MatchEstimate {
    let title = track.title.trim();
    let artist = track.artist.trim();
    let album = track.album.trim();

    if title.is_empty() || artist.is_empty() {
        return MatchEstimate::none();
    }

    let combined = format!("{title}{artist}{album}");

    let breakdown = ConfidenceBreakdown {
        base: BASE_CONFIDENCE,
        title_bonus: bonus(title.chars().count() >= MIN_TITLE_CHARS, TITLE_LENGTH_BONUS),
        artist_bonus: bonus(artist.chars().count() >= MIN_ARTIST_CHARS, ARTIST_LENGTH_BONUS),
        album_bonus: bonus(!album.is_empty(), ALBUM_BONUS),
        keyword_penalty: bonus(!matched_keywords(&combined).is_empty(), KEYWORD_PENALTY),
    };

    let confidence = breakdown.raw().clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);

    MatchEstimate {
        confidence,
        match_found: confidence >= MATCH_THRESHOLD,
        breakdown,
    }
}

fn bonus(applies: bool, amount: f64) -> f64 {
    if applies { amount } else { 0.0 }
}

/// Records an estimate on a track, moving it to `matched` or `failed`.
pub fn apply_estimate(track: &mut Track, estimate: &MatchEstimate) {
    track.confidence = Some(estimate.confidence);
    track.status = if estimate.match_found {
        TrackStatus::Matched
    } else {
        TrackStatus::Failed
    };
}

/// Runs the heuristic matching stage over every track of a manifest.
///
/// Returns the number of tracks marked as matched.
pub fn verify_manifest(manifest: &mut PlaylistManifest) -> usize {
    let mut matched = 0;
    for track in manifest.tracks.iter_mut() {
        track.status = TrackStatus::Matching;
        let estimate = estimate_match(track);
        apply_estimate(track, &estimate);
        if estimate.match_found {
            matched += 1;
        }
    }
    matched
}
