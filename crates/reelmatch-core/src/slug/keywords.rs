//! # Keyword Extraction
//!
//! Splits slugs into the keywords the relevance scorer compares.

use std::collections::HashSet;

use super::normalizer::slugify;

/// Delimiter between keywords in a slug.
const KEYWORD_DELIMITER: char = '-';

/// Splits an already-normalized slug into its non-empty keywords.
///
/// Order and duplicates are preserved.
pub fn split_keywords(slug: &str) -> Vec<String> {
    slug.split(KEYWORD_DELIMITER)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

/// Slugifies `text` and returns its keywords, duplicates included.
///
/// # Examples
/// ```
/// use reelmatch_core::keywords;
///
/// assert_eq!(keywords("Night, Night & Day"), vec!["night", "night", "day"]);
/// ```
pub fn keywords(text: &str) -> Vec<String> {
    split_keywords(&slugify(text))
}

/// Slugifies `text` and returns its unique keywords.
pub fn keyword_set(text: &str) -> HashSet<String> {
    keywords(text).into_iter().collect()
}
