//! # tvmark
//!
//! Season and episode extraction for TV release names, as found on torrent
//! and NZB indexers.
//!
//! ```rust
//! let result = tvmark::parse("Hawaii Five-0 (2010) - 1x05 - Nalowale");
//!
//! assert!(result.is_match("Hawaii Five-0", 1, 5));
//! ```
pub use tvmark_core::*;
