use thiserror::Error;

/// Errors that can occur while building a parser.
///
/// Parsing itself never fails: a name without a recognizable marker yields
/// an unmatched [`ParsedResult`](crate::types::ParsedResult).
#[derive(Debug, Error)]
pub enum TvmarkError {
    /// A noise denylist entry from the configuration does not compile.
    #[error("invalid noise pattern {pattern:?}: {source}")]
    InvalidNoisePattern {
        /// The offending denylist entry.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// A built-in pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    Regex(#[from] regex::Error),

    /// The configuration is structurally valid but unusable.
    #[error("invalid parser configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for tvmark operations.
pub type Result<T> = std::result::Result<T, TvmarkError>;
