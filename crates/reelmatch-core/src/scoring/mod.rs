pub mod related;
pub mod weights;

pub use related::{find_related, RelatedConfig, RelatedFinder, ScoredVideo, DEFAULT_LIMIT};
pub use weights::RelevanceWeights;
