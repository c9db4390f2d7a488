//! # Episode Parser
//!
//! Entry point that chains the normalizer, the pattern matcher and the
//! title extractor into a single `parse` call.

use std::sync::LazyLock;

use tracing::debug;

use crate::config::ParserConfig;
use crate::error::Result;
use crate::parser::matcher::PatternMatcher;
use crate::parser::normalize::Normalizer;
use crate::parser::title::TitleExtractor;
use crate::types::ParsedResult;

static DEFAULT_PARSER: LazyLock<EpisodeParser> = LazyLock::new(|| {
    EpisodeParser::new().expect("built-in patterns and default denylist compile")
});

/// Extracts title, season and episode from TV release names.
///
/// Holds only compiled patterns, so one instance can be shared across
/// threads and reused for any number of names.
#[derive(Debug, Clone)]
pub struct EpisodeParser {
    normalizer: Normalizer,
    matcher: PatternMatcher,
    titles: TitleExtractor,
}

impl EpisodeParser {
    /// Constructs a parser with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `TvmarkError::Regex` if a built-in pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        Self::with_config(ParserConfig::default())
    }

    /// Constructs a parser from a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns `TvmarkError::InvalidConfig` for empty denylist entries or
    /// malformed extensions, and `TvmarkError::InvalidNoisePattern` when a
    /// denylist entry is not a valid regex.
    pub fn with_config(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            normalizer: Normalizer::new(&config)?,
            matcher: PatternMatcher::new(config.absolute_numbering)?,
            titles: TitleExtractor::new(config.strip_title_year)?,
        })
    }

    /// Parses a release name.
    ///
    /// Never fails: a name without a recognizable marker produces an
    /// unmatched result.
    ///
    /// ```
    /// use tvmark_core::EpisodeParser;
    ///
    /// let parser = EpisodeParser::new().unwrap();
    /// let result = parser.parse("Chuck.4x05.HDTV.XviD-LOL");
    ///
    /// assert_eq!(result.title, "Chuck");
    /// assert_eq!((result.season, result.episode), (Some(4), Some(5)));
    /// ```
    pub fn parse(&self, input: &str) -> ParsedResult {
        let normalized = self.normalizer.normalize(input);

        let Some(detection) = self.matcher.detect(&normalized) else {
            debug!(input, "no episode marker found");
            return ParsedResult::unmatched(input, normalized);
        };

        let title = self.titles.extract(&normalized[..detection.marker.start]);
        ParsedResult {
            input: input.to_string(),
            title,
            season: Some(detection.season),
            episode: Some(detection.episode),
            marker: Some(detection.marker),
            normalized,
        }
    }

    /// Returns the canonical working string for a release name.
    pub fn normalize(&self, input: &str) -> String {
        self.normalizer.normalize(input)
    }
}

/// Convenience function to parse a release name with default settings.
pub fn parse(input: &str) -> ParsedResult {
    DEFAULT_PARSER.parse(input)
}

/// Convenience function to normalize a release name with default settings.
pub fn normalize(input: &str) -> String {
    DEFAULT_PARSER.normalize(input)
}
