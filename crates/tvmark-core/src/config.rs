//! Parser configuration.
//!
//! The noise denylist and the list of stripped file extensions live here
//! rather than in the matcher, so new release conventions can be added
//! without touching recognizer logic.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TvmarkError};

/// Default noise tokens, as case-insensitive regex fragments.
///
/// Each entry is matched as a whole word against the dot/underscore-free
/// working string, which is why `H.264` appears as `h ?264`.
pub const DEFAULT_NOISE_TOKENS: &[&str] = &[
    // resolution
    r"[0-9]{3,4}[pi]",
    r"[0-9]{3,4}x(?:480|576|720|1080|2160)",
    // video codec
    r"[xh] ?26[45]",
    r"xvid",
    r"divx",
    r"hevc",
    r"avc",
    // source
    r"hdtv",
    r"web[ -]?dl",
    r"web[ -]?rip",
    r"dvd[ -]?rip",
    r"dvd",
    r"blu[ -]?ray",
    r"b[dr][ -]?rip",
    r"hdrip",
    r"dsr",
    r"pdtv",
    r"sdtv",
    // audio
    r"dd ?5 ?1",
    r"aac ?2 ?0",
    r"aac",
    r"ac3",
    r"dts",
    // crc32
    r"[0-9a-f]{8}",
];

/// File extensions stripped from the end of a name before matching.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "mkv", "avi", "mp4", "m4v", "mpg", "mpeg", "wmv", "mov", "ogm", "divx",
];

/// Configuration for [`EpisodeParser`](crate::parser::EpisodeParser).
///
/// Deserializes from partial JSON; missing fields take their defaults.
///
/// ```
/// use tvmark_core::ParserConfig;
///
/// let config = ParserConfig::new()
///     .with_noise_token(r"amzn")
///     .with_absolute_numbering(false);
/// assert!(config.noise_tokens.iter().any(|t| t == "amzn"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Release metadata tokens removed before matching (regex fragments).
    pub noise_tokens: Vec<String>,
    /// File extensions (without the dot) stripped from the end of a name.
    pub extensions: Vec<String>,
    /// Drop a release year or air date sitting between title and marker.
    pub strip_title_year: bool,
    /// Accept undelimited digit runs such as `103` as season/episode.
    pub absolute_numbering: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            noise_tokens: DEFAULT_NOISE_TOKENS.iter().map(|t| t.to_string()).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            strip_title_year: true,
            absolute_numbering: true,
        }
    }
}

impl ParserConfig {
    /// Create a new parser configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a noise token to the denylist.
    pub fn with_noise_token(mut self, token: impl Into<String>) -> Self {
        self.noise_tokens.push(token.into());
        self
    }

    /// Replace the noise denylist.
    pub fn with_noise_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.noise_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Add a file extension to strip.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extensions
            .push(extension.into().trim_start_matches('.').to_string());
        self
    }

    /// Keep or drop a year between title and marker.
    pub fn with_strip_title_year(mut self, enabled: bool) -> Self {
        self.strip_title_year = enabled;
        self
    }

    /// Enable or disable the absolute digit-run recognizer.
    pub fn with_absolute_numbering(mut self, enabled: bool) -> Self {
        self.absolute_numbering = enabled;
        self
    }

    /// Checks entries that would compile but make no sense.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.noise_tokens.iter().any(|t| t.trim().is_empty()) {
            return Err(TvmarkError::InvalidConfig("empty noise token".into()));
        }
        if let Some(ext) = self
            .extensions
            .iter()
            .find(|e| e.is_empty() || !e.chars().all(|c| c.is_ascii_alphanumeric()))
        {
            return Err(TvmarkError::InvalidConfig(format!(
                "extension {ext:?} must be non-empty and alphanumeric"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ParserConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.strip_title_year);
        assert!(config.absolute_numbering);
        assert!(config.extensions.iter().any(|e| e == "mkv"));
    }

    #[test]
    fn builder_methods() {
        let config = ParserConfig::new()
            .with_noise_tokens(["hdtv"])
            .with_extension(".webm")
            .with_strip_title_year(false)
            .with_absolute_numbering(false);

        assert_eq!(config.noise_tokens, vec!["hdtv".to_string()]);
        assert_eq!(config.extensions.last().map(String::as_str), Some("webm"));
        assert!(!config.strip_title_year);
        assert!(!config.absolute_numbering);
    }

    #[test]
    fn empty_entries_are_rejected() {
        let config = ParserConfig::new().with_noise_token("  ");
        assert!(matches!(config.validate(), Err(TvmarkError::InvalidConfig(_))));

        let config = ParserConfig::new().with_extension("");
        assert!(matches!(config.validate(), Err(TvmarkError::InvalidConfig(_))));
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: ParserConfig =
            serde_json::from_str(r#"{ "absolute_numbering": false }"#).unwrap();
        assert!(!config.absolute_numbering);
        assert!(config.strip_title_year);
        assert_eq!(config.noise_tokens.len(), DEFAULT_NOISE_TOKENS.len());
    }
}
