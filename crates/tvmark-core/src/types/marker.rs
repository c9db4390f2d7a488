use std::fmt;

use serde::{Deserialize, Serialize};

/// The recognizer class that accepted an episode marker.
///
/// Variants are declared in priority order: the matcher tries them top to
/// bottom and stops at the first class that yields a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    /// "S02E15", "s03.e05", "S1-E1", "S15 E06"
    SeasonEpisode,
    /// "Season 01 Episode 05", "S03 Ep06", "S02 - E06"
    SeasonEpisodeWords,
    /// "4x05", "2009x09", "41x10478"
    Cross,
    /// "[1x05]", "(06x16)", "-1x05-", "[S01E05]"
    Delimited,
    /// "103", "1013": season and episode packed into one digit run
    Absolute,
    /// "Part01", "Part Two", "5of9"
    Part,
    /// "11-02" at the very start of a name
    DashedPair,
}

impl MarkerKind {
    /// All recognizer classes in the order the matcher tries them.
    pub const PRIORITY: [MarkerKind; 7] = [
        Self::SeasonEpisode,
        Self::SeasonEpisodeWords,
        Self::Cross,
        Self::Delimited,
        Self::Absolute,
        Self::Part,
        Self::DashedPair,
    ];
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SeasonEpisode => "season-episode",
            Self::SeasonEpisodeWords => "season-episode-words",
            Self::Cross => "cross",
            Self::Delimited => "delimited",
            Self::Absolute => "absolute",
            Self::Part => "part",
            Self::DashedPair => "dashed-pair",
        };
        f.write_str(name)
    }
}

/// The span of a normalized release name that encodes season/episode.
///
/// Offsets are byte offsets into [`ParsedResult::normalized`](super::ParsedResult::normalized).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EpisodeMarker {
    /// Which recognizer accepted the span.
    pub kind: MarkerKind,
    /// The matched text, as it appears in the normalized name.
    pub text: String,
    /// Start offset (inclusive).
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
}

impl EpisodeMarker {
    pub(crate) fn new(kind: MarkerKind, normalized: &str, start: usize, end: usize) -> Self {
        Self {
            kind,
            text: normalized[start..end].to_string(),
            start,
            end,
        }
    }
}
