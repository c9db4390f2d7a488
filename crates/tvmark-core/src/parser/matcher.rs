//! # Pattern Matcher
//!
//! An ordered list of recognizers, one per [`MarkerKind`]. The sweep tries
//! each class over the whole normalized name and stops at the first class
//! that produces an acceptable candidate; within a class the left-most
//! candidate wins. Season and episode always come from one capture.

use regex::{Captures, Regex};
use tracing::{debug, trace};

use crate::error::Result;
use crate::types::{EpisodeMarker, MarkerKind};

/// Spelled-out part numbers accepted after `Part`.
const PART_WORDS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
    "twenty",
];

/// A marker accepted by the sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub marker: EpisodeMarker,
    pub season: u32,
    pub episode: u32,
}

#[derive(Debug, Clone)]
struct Recognizer {
    kind: MarkerKind,
    regex: Regex,
}

/// Candidate produced by one recognizer before it becomes a [`Detection`].
struct Candidate {
    start: usize,
    end: usize,
    season: u32,
    episode: u32,
}

/// Runs the recognizer classes in priority order.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    recognizers: Vec<Recognizer>,
}

impl PatternMatcher {
    /// Builds the recognizer list. With `absolute_numbering` off the
    /// undelimited digit-run class is left out.
    pub fn new(absolute_numbering: bool) -> Result<Self> {
        let mut recognizers = Vec::with_capacity(MarkerKind::PRIORITY.len());
        for kind in MarkerKind::PRIORITY {
            if kind == MarkerKind::Absolute && !absolute_numbering {
                continue;
            }
            recognizers.push(Recognizer {
                kind,
                regex: Regex::new(pattern_for(kind))?,
            });
        }
        Ok(Self { recognizers })
    }

    /// Finds the single episode marker in a normalized name, if any.
    pub fn detect(&self, normalized: &str) -> Option<Detection> {
        self.recognizers.iter().find_map(|recognizer| {
            let candidate = recognizer.first_candidate(normalized)?;
            let marker =
                EpisodeMarker::new(recognizer.kind, normalized, candidate.start, candidate.end);
            debug!(
                kind = %recognizer.kind,
                marker = %marker.text,
                season = candidate.season,
                episode = candidate.episode,
                "accepted episode marker"
            );
            Some(Detection {
                marker,
                season: candidate.season,
                episode: candidate.episode,
            })
        })
    }
}

fn pattern_for(kind: MarkerKind) -> &'static str {
    match kind {
        MarkerKind::SeasonEpisode => r"(?i)s([0-9]+)[ .\-]?e([0-9]+)",
        MarkerKind::SeasonEpisodeWords => {
            r"(?i)\b(?:season\s*|s)([0-9]+)[\s\-]*(?:episode|ep|e)\s*([0-9]+)"
        }
        MarkerKind::Cross => r"(?i)([0-9]+)x([0-9]+)",
        MarkerKind::Delimited => {
            r"(?i)[\[(\-]\s*(?:([0-9]+)x([0-9]+)|s([0-9]+)[ .\-]?e([0-9]+))\s*[\])\-]"
        }
        MarkerKind::Absolute => r"[0-9]+",
        MarkerKind::Part => {
            r"(?i)\bpart\s*([0-9]{1,3}|one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve|thirteen|fourteen|fifteen|sixteen|seventeen|eighteen|nineteen|twenty)\b|\b([0-9]{1,3})of[0-9]{1,3}\b"
        }
        MarkerKind::DashedPair => r"^([0-9]{1,2})-([0-9]{2})(?:\s|$)",
    }
}

impl Recognizer {
    fn first_candidate(&self, text: &str) -> Option<Candidate> {
        self.regex
            .captures_iter(text)
            .find_map(|caps| self.accept(text, &caps))
    }

    fn accept(&self, text: &str, caps: &Captures) -> Option<Candidate> {
        let whole = caps.get(0)?;
        let (start, end) = (whole.start(), whole.end());

        match self.kind {
            MarkerKind::SeasonEpisode | MarkerKind::SeasonEpisodeWords => {
                let (season, episode) = pair(caps, 1, 2)?;
                Some(Candidate { start, end, season, episode })
            }
            MarkerKind::Cross => {
                let left_ok = text[..start].chars().next_back().is_none_or(char::is_whitespace);
                let right_ok = text[end..]
                    .chars()
                    .next()
                    .is_none_or(|c| c.is_whitespace() || c == '-');
                if !(left_ok && right_ok) {
                    trace!(candidate = whole.as_str(), "cross form not delimited by whitespace");
                    return None;
                }
                let (season, episode) = pair(caps, 1, 2)?;
                Some(Candidate { start, end, season, episode })
            }
            MarkerKind::Delimited => {
                let (season, episode) = pair(caps, 1, 2).or_else(|| pair(caps, 3, 4))?;
                Some(Candidate { start, end, season, episode })
            }
            MarkerKind::Absolute => absolute(text, start, end),
            MarkerKind::Part => {
                let episode = match caps.get(1) {
                    Some(m) => part_number(m.as_str())?,
                    None => number(caps.get(2)?.as_str())?,
                };
                Some(Candidate { start, end, season: 1, episode })
            }
            MarkerKind::DashedPair => {
                let (season, episode) = pair(caps, 1, 2)?;
                let end = caps.get(2)?.end();
                Some(Candidate { start, end, season, episode })
            }
        }
    }
}

/// Decodes an undelimited digit run such as `1013`: the last two digits are
/// the episode, everything before them the season.
fn absolute(text: &str, start: usize, end: usize) -> Option<Candidate> {
    let digits = &text[start..end];
    if !(3..=5).contains(&digits.len()) {
        return None;
    }

    let is_separator = |c: char| c == ' ' || c == '-';
    let left_ok = text[..start].chars().next_back().is_some_and(is_separator);
    let right_ok = text[end..].chars().next().is_none_or(is_separator);
    if !(left_ok && right_ok) {
        return None;
    }

    if digits.len() == 4 && (digits.starts_with("19") || digits.starts_with("20")) {
        trace!(candidate = digits, "digit run looks like a year");
        return None;
    }

    let (season, episode) = digits.split_at(digits.len() - 2);
    if episode == "00" {
        trace!(candidate = digits, "digit run decodes to episode zero");
        return None;
    }

    Some(Candidate {
        start,
        end,
        season: number(season)?,
        episode: number(episode)?,
    })
}

fn pair(caps: &Captures, season: usize, episode: usize) -> Option<(u32, u32)> {
    Some((
        number(caps.get(season)?.as_str())?,
        number(caps.get(episode)?.as_str())?,
    ))
}

/// Base-10 parse; overflow rejects the candidate instead of the whole parse.
fn number(digits: &str) -> Option<u32> {
    match digits.parse() {
        Ok(n) => Some(n),
        Err(err) => {
            trace!(digits, %err, "rejected numeric capture");
            None
        }
    }
}

fn part_number(token: &str) -> Option<u32> {
    if token.starts_with(|c: char| c.is_ascii_digit()) {
        return number(token);
    }
    let lower = token.to_ascii_lowercase();
    PART_WORDS
        .iter()
        .position(|w| *w == lower)
        .and_then(|idx| u32::try_from(idx + 1).ok())
}
