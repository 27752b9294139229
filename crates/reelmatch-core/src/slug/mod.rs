pub mod keywords;
pub mod normalizer;

pub use keywords::{keyword_set, keywords, split_keywords};
pub use normalizer::{slugify, Slugifier};
