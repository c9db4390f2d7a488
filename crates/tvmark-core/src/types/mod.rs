pub mod marker;
pub mod result;

pub use marker::{EpisodeMarker, MarkerKind};
pub use result::ParsedResult;
