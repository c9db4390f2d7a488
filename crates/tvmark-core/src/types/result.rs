use std::fmt;

use serde::{Deserialize, Serialize};

use super::marker::EpisodeMarker;

/// The output of the tvmark parsing engine.
///
/// Season and episode are either both present or both absent; they always
/// come from the same [`EpisodeMarker`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResult {
    /// Original input string.
    pub input: String,

    /// The canonical working string the matcher ran on.
    pub normalized: String,

    /// Show title recovered from the text before the marker. May be empty.
    pub title: String,

    /// Season number.
    pub season: Option<u32>,

    /// Episode number.
    pub episode: Option<u32>,

    /// Provenance of the accepted marker.
    pub marker: Option<EpisodeMarker>,
}

impl ParsedResult {
    /// Creates a result for a name in which no marker was found.
    #[must_use]
    pub fn unmatched(input: impl Into<String>, normalized: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            normalized: normalized.into(),
            title: String::new(),
            season: None,
            episode: None,
            marker: None,
        }
    }

    /// Returns `true` if an episode marker was found.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.marker.is_some()
    }

    /// Checks this result against an expected title, season and episode.
    ///
    /// Titles are compared case-insensitively after collapsing whitespace;
    /// season and episode must be equal. Always `false` for an unmatched
    /// result.
    #[must_use]
    pub fn is_match(&self, title: &str, season: u32, episode: u32) -> bool {
        self.is_matched()
            && self.season == Some(season)
            && self.episode == Some(episode)
            && comparable(&self.title) == comparable(title)
    }
}

fn comparable(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl fmt::Display for ParsedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParsedResult(title={:?}", self.title)?;
        if let (Some(season), Some(episode)) = (self.season, self.episode) {
            write!(f, ", S{season:02}E{episode:02}")?;
        }
        match &self.marker {
            Some(marker) => write!(f, ", marker={}:{:?}", marker.kind, marker.text)?,
            None => write!(f, ", unmatched")?,
        }
        write!(f, ")")
    }
}
