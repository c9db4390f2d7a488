//! # tvmark Core
//!
//! The filename interpretation engine behind tvmark: given a release name
//! from a torrent or NZB indexer, recover the show title, season number and
//! episode number.
//!
//! ## Quick Start
//!
//! ```rust
//! use tvmark_core::parse;
//!
//! let result = parse("Two.and.a.Half.Me.1013.720p.HDTV.X264-DIMENSION");
//!
//! assert_eq!(result.title, "Two and a Half Me");
//! assert_eq!(result.season, Some(10));
//! assert_eq!(result.episode, Some(13));
//! assert!(result.is_match("two and a half me", 10, 13));
//! ```
pub mod config;
pub mod error;
pub mod parser;
pub mod types;

// Re-export primary API
pub use config::ParserConfig;
pub use error::{Result, TvmarkError};
pub use parser::{normalize, parse, EpisodeParser};
pub use types::{EpisodeMarker, MarkerKind, ParsedResult};
