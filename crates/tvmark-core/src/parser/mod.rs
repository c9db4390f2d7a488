pub mod episode;
pub mod matcher;
pub mod normalize;
pub mod title;

pub use episode::{normalize, parse, EpisodeParser};
pub use matcher::{Detection, PatternMatcher};
pub use normalize::Normalizer;
pub use title::TitleExtractor;
