//! # Title Extractor
//!
//! Recovers a readable show title from the normalized text that precedes
//! the accepted episode marker.

use regex::Regex;

use crate::error::Result;

/// Cleans the prefix in front of an episode marker into a title.
#[derive(Debug, Clone)]
pub struct TitleExtractor {
    re_bracket_group: Regex,
    re_trailing_year: Regex,
    re_whitespace: Regex,
    strip_year: bool,
}

impl TitleExtractor {
    /// Compiles the extractor. `strip_year` drops a trailing year or air
    /// date from titles that have other text before it.
    pub fn new(strip_year: bool) -> Result<Self> {
        Ok(Self {
            re_bracket_group: Regex::new(r"\[[^\[\]]*\]|\([^()]*\)|\{[^{}]*\}")?,
            re_trailing_year: Regex::new(
                r"^(.*\S)[\s\-]+(?:19|20)[0-9]{2}(?:[\s\-][0-9]{1,2}[\s\-][0-9]{1,2})?$",
            )?,
            re_whitespace: Regex::new(r"\s+")?,
            strip_year,
        })
    }

    /// Extracts the title from `prefix`, the text before the marker.
    ///
    /// Returns an empty string when the prefix holds nothing but
    /// separators, which is what a name starting with its marker yields.
    pub fn extract(&self, prefix: &str) -> String {
        // An unbalanced quote means the title is the quoted part.
        let quoted = if prefix.matches('"').count() % 2 == 1 {
            prefix.rsplit('"').next().unwrap_or(prefix)
        } else {
            prefix
        };

        let without_groups = self.re_bracket_group.replace_all(quoted, " ");
        let mut title = trim_separators(&without_groups).to_string();

        if self.strip_year {
            if let Some(caps) = self.re_trailing_year.captures(&title) {
                title = trim_separators(&caps[1]).to_string();
            }
        }

        self.re_whitespace.replace_all(&title, " ").into_owned()
    }
}

/// Trims whitespace, separator hyphens and dangling delimiters from both
/// ends. Hyphens inside words are untouched.
fn trim_separators(s: &str) -> &str {
    s.trim_matches(|c: char| {
        c.is_whitespace()
            || matches!(c, '-' | '\u{2013}' | '\u{2014}' | '[' | ']' | '(' | ')' | '{' | '}' | '"')
    })
}
