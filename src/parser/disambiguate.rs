//! Title/artist disambiguation.
//!
//! When a line splits into two fragments of unknown order ("Title - Artist"
//! versus "Artist - Title"), each fragment is scored for title-like and
//! artist-like signals and the higher-scoring assignment wins. The scores are
//! exposed as breakdowns so individual signals can be inspected.

use std::sync::LazyLock;

use regex::Regex;

/// Words that mark a fragment as a song title (version tags, featured artists).
pub const TITLE_HINT_KEYWORDS: [&str; 15] = [
    "remix",
    "mix",
    "edit",
    "version",
    "live",
    "demo",
    "acoustic",
    "instrumental",
    "remaster",
    "remastered",
    "radio",
    "extended",
    "feat",
    "ft",
    "featuring",
];

const KEYWORD_POINTS: u32 = 2;
const BRACKET_CHARS: [char; 5] = ['(', ')', '[', ']', '{'];

#[allow(clippy::expect_used)]
static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}").expect("year regex is valid"));

/// Returns the hint keywords contained in `text`, case-insensitively.
pub fn matched_keywords(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    TITLE_HINT_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| lower.contains(keyword))
        .collect()
}

/// Title-like signals found in one fragment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TitleScore {
    pub keywords: Vec<&'static str>,
    pub has_bracket: bool,
    pub has_year: bool,
}

impl TitleScore {
    /// Scores a fragment for signs that it is a song title.
    ///
    /// # Arguments
    ///
    /// * `fragment` - One side of a split track line
    ///
    /// # Returns
    ///
    /// The matched hint keywords plus whether the fragment contains a bracket
    /// and a four-digit run (a year, as in "2012 Remaster").
    ///
    /// # Example
    ///
    /// ```
    /// let score = TitleScore::of("Die For You (Remix)");
    /// assert_eq!(score.keywords, vec!["remix", "mix"]);
    /// assert_eq!(score.total(), 5);
    /// ```
    pub fn of(fragment: &str) -> Self {
        TitleScore {
            keywords: matched_keywords(fragment),
            has_bracket: fragment.contains(&BRACKET_CHARS[..]),
            has_year: YEAR_PATTERN.is_match(fragment),
        }
    }

    /// Two points per keyword, one for a bracket, one for a year.
    pub fn total(&self) -> u32 {
        self.keywords.len() as u32 * KEYWORD_POINTS
            + u32::from(self.has_bracket)
            + u32::from(self.has_year)
    }
}

/// Collaboration markers found in one fragment, one point each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArtistScore {
    pub ampersand: bool,
    pub cross: bool,
    pub versus: bool,
    pub and: bool,
    pub with: bool,
}

impl ArtistScore {
    /// Scores a fragment for signs that it names performers.
    ///
    /// # Arguments
    ///
    /// * `fragment` - One side of a split track line
    ///
    /// # Returns
    ///
    /// Which of `&`, ` x `, ` vs `, ` and `, ` with ` the fragment contains,
    /// compared case-insensitively.
    ///
    /// # Example
    ///
    /// ```
    /// let score = ArtistScore::of("Calvin Harris & Dua Lipa");
    /// assert!(score.ampersand);
    /// assert_eq!(score.total(), 1);
    /// ```
    pub fn of(fragment: &str) -> Self {
        let lower = fragment.to_lowercase();
        ArtistScore {
            ampersand: lower.contains('&'),
            cross: lower.contains(" x "),
            versus: lower.contains(" vs "),
            and: lower.contains(" and "),
            with: lower.contains(" with "),
        }
    }

    pub fn total(&self) -> u32 {
        [self.ampersand, self.cross, self.versus, self.and, self.with]
            .into_iter()
            .map(u32::from)
            .sum()
    }
}

/// Both scores of one fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentScore {
    pub title: TitleScore,
    pub artist: ArtistScore,
}

impl FragmentScore {
    /// Computes the title and artist scores of `fragment`.
    pub fn of(fragment: &str) -> Self {
        FragmentScore {
            title: TitleScore::of(fragment),
            artist: ArtistScore::of(fragment),
        }
    }
}

/// Which fragment was picked as the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSide {
    Left,
    Right,
}

/// Outcome of [`disambiguate`], with the scores that led to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disambiguation {
    pub title: String,
    pub artist: String,
    pub title_side: TitleSide,
    pub left: FragmentScore,
    pub right: FragmentScore,
}

/// Decides which of two fragments is the title and which the artist.
///
/// The fragment with the higher title score is the title, provided the other
/// fragment is at least as artist-like. Failing that, the more artist-like
/// fragment is the artist. Ties on every signal resolve to "left is the title".
///
/// # Arguments
///
/// * `left` - The fragment that came first in the line
/// * `right` - The fragment that came second
///
/// # Returns
///
/// A [`Disambiguation`] carrying the chosen title and artist, the side the
/// title came from and both fragment scores.
///
/// # Example
///
/// ```
/// let result = disambiguate("Calvin Harris & Dua Lipa", "One Kiss");
/// assert_eq!(result.title, "One Kiss");
/// assert_eq!(result.title_side, TitleSide::Right);
/// ```
pub fn disambiguate(left: &str, right: &str) -> Disambiguation {
    let left_score = FragmentScore::of(left);
    let right_score = FragmentScore::of(right);

    let title_side = decide(&left_score, &right_score);
    let (title, artist) = match title_side {
        TitleSide::Left => (left, right),
        TitleSide::Right => (right, left),
    };

    Disambiguation {
        title: title.to_string(),
        artist: artist.to_string(),
        title_side,
        left: left_score,
        right: right_score,
    }
}

fn decide(left: &FragmentScore, right: &FragmentScore) -> TitleSide {
    let (left_title, right_title) = (left.title.total(), right.title.total());
    let (left_artist, right_artist) = (left.artist.total(), right.artist.total());

    if left_title > right_title && right_artist >= left_artist {
        TitleSide::Left
    } else if right_title > left_title && left_artist >= right_artist {
        TitleSide::Right
    } else if right_artist > left_artist {
        TitleSide::Left
    } else if left_artist > right_artist {
        TitleSide::Right
    } else {
        TitleSide::Left
    }
}
