//! # Normalizer
//!
//! Turns a raw release name into the canonical working string the
//! recognizers run on: extension and site tag removed, dots and underscores
//! unified to spaces, release metadata dropped, whitespace collapsed.

use regex::{Captures, Regex};

use crate::config::ParserConfig;
use crate::error::{Result, TvmarkError};

/// Canonicalizes release names. Stateless once built.
#[derive(Debug, Clone)]
pub struct Normalizer {
    re_extension: Option<Regex>,
    re_site_tag: Regex,
    re_separators: Regex,
    re_bracket_group: Regex,
    re_marker_hint: Regex,
    re_noise: Option<Regex>,
    re_group_suffix: Option<Regex>,
    re_whitespace: Regex,
}

impl Normalizer {
    /// Compiles the normalizer for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `TvmarkError::InvalidNoisePattern` naming the first denylist
    /// entry that does not compile.
    pub fn new(config: &ParserConfig) -> Result<Self> {
        for token in &config.noise_tokens {
            Regex::new(&format!("(?i)^(?:{token})$")).map_err(|source| {
                TvmarkError::InvalidNoisePattern {
                    pattern: token.clone(),
                    source,
                }
            })?;
        }

        let noise = (!config.noise_tokens.is_empty()).then(|| config.noise_tokens.join("|"));

        let re_extension = if config.extensions.is_empty() {
            None
        } else {
            let alternatives = config
                .extensions
                .iter()
                .map(|e| regex::escape(e))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&format!(r"(?i)\.(?:{alternatives})$"))?)
        };

        Ok(Self {
            re_extension,
            re_site_tag: Regex::new(r"(?i)^\[\s*www\.[^\]]*\]\s*-?\s*")?,
            re_separators: Regex::new(r"[._]+")?,
            re_bracket_group: Regex::new(r"\[([^\[\]]*)\]|\(([^()]*)\)")?,
            re_marker_hint: Regex::new(r"(?i)s[0-9]+[ \-]?e[0-9]+|[0-9]+x[0-9]+")?,
            re_noise: noise
                .as_ref()
                .map(|n| Regex::new(&format!(r"(?i)\b(?:{n})\b")))
                .transpose()?,
            re_group_suffix: noise
                .as_ref()
                .map(|n| Regex::new(&format!(r"(?i)\b(?:{n})-[a-z0-9]+$")))
                .transpose()?,
            re_whitespace: Regex::new(r"\s+")?,
        })
    }

    /// Produces the canonical working string for `input`.
    ///
    /// Applying this to its own output returns the output unchanged.
    pub fn normalize(&self, input: &str) -> String {
        let mut work = input.trim().to_string();

        if let Some(re) = &self.re_extension {
            work = re.replace(&work, "").into_owned();
        }
        work = self.re_site_tag.replace(&work, "").into_owned();
        work = self.re_separators.replace_all(&work, " ").into_owned();

        work = self.strip_metadata_groups(work);

        if let Some(re) = &self.re_group_suffix {
            work = re.replace(work.trim_end(), "").into_owned();
        }
        if let Some(re) = &self.re_noise {
            work = re.replace_all(&work, " ").into_owned();
        }

        self.re_whitespace
            .replace_all(&work, " ")
            .trim()
            .to_string()
    }

    /// Drops metadata-only bracket groups. Removing an inner group can leave
    /// its enclosing group empty, so passes repeat until nothing changes.
    fn strip_metadata_groups(&self, mut work: String) -> String {
        loop {
            let next = self
                .re_bracket_group
                .replace_all(&work, |caps: &Captures| {
                    let content = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
                    if self.is_metadata(content) {
                        " ".to_string()
                    } else {
                        caps[0].to_string()
                    }
                })
                .into_owned();
            if next == work {
                return work;
            }
            work = next;
        }
    }

    /// A bracket group is metadata when nothing but separators remains after
    /// removing noise tokens. Marker-shaped content never is.
    fn is_metadata(&self, content: &str) -> bool {
        if self.re_marker_hint.is_match(content) {
            return false;
        }
        let residue = match &self.re_noise {
            Some(re) => re.replace_all(content, ""),
            None => content.into(),
        };
        residue
            .chars()
            .all(|c| c.is_whitespace() || matches!(c, '-' | '+' | ','))
    }
}
