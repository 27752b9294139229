//! # Reelmatch Core
//!
//! Related-video recommendations for video listing sites. Provides the slug
//! normalizer used for keyword comparison, the relevance scorer that ranks a
//! catalog against the video being viewed, and the catalog type that loads
//! video records from JSON.
//!
//! ## Quick Start
//!
//! ```rust
//! use reelmatch_core::{find_related, slugify, VideoRecord, DEFAULT_LIMIT};
//!
//! assert_eq!(slugify("Café Society"), "cafe-society");
//!
//! let current = VideoRecord::new("1", "Hot Summer Night", "Romance");
//! let catalog = vec![
//!     current.clone(),
//!     VideoRecord::new("2", "Summer Nights", "Romance"),
//!     VideoRecord::new("3", "Winter Days", "Drama"),
//! ];
//!
//! let related = find_related(Some(&current), &catalog, DEFAULT_LIMIT);
//! assert_eq!(related.len(), 1);
//! assert_eq!(related[0].id, "2");
//! ```
pub mod catalog;
pub mod error;
pub mod scoring;
pub mod slug;
pub mod types;

// Re-export primary API
pub use catalog::Catalog;
pub use error::{ReelmatchError, Result};
pub use scoring::{
    find_related, RelatedConfig, RelatedFinder, RelevanceWeights, ScoredVideo, DEFAULT_LIMIT,
};
pub use slug::{keyword_set, keywords, slugify, Slugifier};
pub use types::VideoRecord;
