//! # Related Video Scoring
//!
//! Ranks a catalog against the video currently being viewed. Each candidate
//! earns points for every title keyword it shares with the current video and
//! a flat bonus when the categories match exactly after slugging.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{ReelmatchError, Result};
use crate::scoring::weights::RelevanceWeights;
use crate::slug::{keyword_set, keywords, slugify};
use crate::types::VideoRecord;

/// Number of related videos returned when no limit is configured.
pub const DEFAULT_LIMIT: usize = 20;

/// Configuration for the related-video finder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedConfig {
    /// Maximum number of videos returned. Does not bound how many are scored.
    pub limit: usize,
    /// Points per relevance signal.
    pub weights: RelevanceWeights,
}

impl Default for RelatedConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            weights: RelevanceWeights::default(),
        }
    }
}

impl RelatedConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the result limit. Zero yields no results.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the relevance weights.
    pub fn with_weights(mut self, weights: RelevanceWeights) -> Self {
        self.weights = weights;
        self
    }
}

/// A related video together with the score that ranked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredVideo<'a> {
    /// The related video, borrowed from the caller's catalog.
    pub video: &'a VideoRecord,
    /// Total relevance score; always positive.
    pub score: u32,
}

/// Finds related videos with a fixed configuration.
///
/// Stateless between calls: every intermediate keyword set and score lives
/// on the stack of a single call, so one finder can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct RelatedFinder {
    config: RelatedConfig,
}

impl RelatedFinder {
    /// Create a finder with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ReelmatchError::InvalidWeights` if every weight is zero, since
    /// such a finder could never return anything.
    pub fn new(config: RelatedConfig) -> Result<Self> {
        if !config.weights.is_valid() {
            return Err(ReelmatchError::InvalidWeights(
                "at least one of title_keyword or category_match must be non-zero".into(),
            ));
        }
        Ok(Self { config })
    }

    /// The configuration this finder was built with.
    pub fn config(&self) -> &RelatedConfig {
        &self.config
    }

    /// Returns the videos in `all` most related to `current`, best first.
    ///
    /// Returns an empty list when `current` is `None` or `all` holds fewer
    /// than two videos. The current video (matched by id) is never included.
    ///
    /// # Examples
    /// ```
    /// use reelmatch_core::{RelatedConfig, RelatedFinder, VideoRecord};
    ///
    /// let finder = RelatedFinder::new(RelatedConfig::new().with_limit(5)).unwrap();
    /// let current = VideoRecord::new("1", "Hot Summer Night", "Romance");
    /// let catalog = vec![
    ///     VideoRecord::new("2", "Summer Nights", "Romance"),
    ///     VideoRecord::new("3", "Winter Days", "Drama"),
    /// ];
    ///
    /// let related = finder.find(Some(&current), &catalog);
    /// assert_eq!(related.iter().map(|v| v.id.as_str()).collect::<Vec<_>>(), ["2"]);
    /// ```
    pub fn find<'a>(
        &self,
        current: Option<&VideoRecord>,
        all: &'a [VideoRecord],
    ) -> Vec<&'a VideoRecord> {
        self.rank(current, all)
            .into_iter()
            .map(|scored| scored.video)
            .collect()
    }

    /// Same ordering as [`find`](Self::find), keeping each video's score.
    ///
    /// Candidates with a score of zero are dropped. Equal scores keep their
    /// catalog order.
    pub fn rank<'a>(
        &self,
        current: Option<&VideoRecord>,
        all: &'a [VideoRecord],
    ) -> Vec<ScoredVideo<'a>> {
        let Some(current) = current else {
            return Vec::new();
        };
        if all.len() <= 1 || self.config.limit == 0 {
            debug!(
                id = %current.id,
                catalog = all.len(),
                limit = self.config.limit,
                "no candidates to rank"
            );
            return Vec::new();
        }

        let title_keywords = keyword_set(&current.title);
        let category_key = slugify(&current.category);

        let mut scored: Vec<ScoredVideo<'a>> = all
            .iter()
            .filter(|candidate| !candidate.same_video(current))
            .filter_map(|candidate| {
                let score = self.score_candidate(&title_keywords, &category_key, candidate);
                trace!(candidate = %candidate.id, score, "scored candidate");
                (score > 0).then_some(ScoredVideo {
                    video: candidate,
                    score,
                })
            })
            .collect();

        // sort_by is stable: ties stay in catalog order.
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        let matched = scored.len();
        scored.truncate(self.config.limit);

        debug!(
            id = %current.id,
            catalog = all.len(),
            matched,
            returned = scored.len(),
            "ranked related videos"
        );
        scored
    }

    fn score_candidate(
        &self,
        title_keywords: &HashSet<String>,
        category_key: &str,
        candidate: &VideoRecord,
    ) -> u32 {
        let keyword_matches = keywords(&candidate.title)
            .iter()
            .filter(|keyword| title_keywords.contains(keyword.as_str()))
            .count();
        let keyword_matches = u32::try_from(keyword_matches).unwrap_or(u32::MAX);

        let category_matches =
            !category_key.is_empty() && slugify(&candidate.category) == category_key;

        self.config.weights.score(keyword_matches, category_matches)
    }
}

/// Returns up to `limit` videos from `all` related to `current`, using the
/// default weights.
///
/// Pass [`DEFAULT_LIMIT`] for the standard page size.
pub fn find_related<'a>(
    current: Option<&VideoRecord>,
    all: &'a [VideoRecord],
    limit: usize,
) -> Vec<&'a VideoRecord> {
    let finder = RelatedFinder {
        config: RelatedConfig::new().with_limit(limit),
    };
    finder.find(current, all)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, title: &str, category: &str) -> VideoRecord {
        VideoRecord::new(id, title, category)
    }

    fn ids<'a>(videos: &[&'a VideoRecord]) -> Vec<&'a str> {
        videos.iter().map(|v| v.id.as_str()).collect()
    }

    fn sample_catalog() -> Vec<VideoRecord> {
        vec![
            video("1", "Hot Summer Night", "Romance"),
            video("2", "Summer Nights", "Romance"),
            video("3", "Winter Days", "Drama"),
            video("4", "Hot Summer Night Live", "Concert"),
            video("5", "A Night at the Opera", "Concert"),
            video("6", "Summer Romance", "Romance"),
            video("7", "Night Summer Hot", "Drama"),
            video("8", "Cold Nights", "Romance"),
        ]
    }

    #[test]
    fn test_absent_current_returns_empty() {
        let catalog = sample_catalog();
        assert!(find_related(None, &catalog, DEFAULT_LIMIT).is_empty());
    }

    #[test]
    fn test_empty_and_singleton_catalogs() {
        let current = video("1", "Hot Summer Night", "Romance");
        assert!(find_related(Some(&current), &[], DEFAULT_LIMIT).is_empty());
        assert!(find_related(Some(&current), &[current.clone()], DEFAULT_LIMIT).is_empty());

        // A single *different* video is still below the two-record minimum.
        let other = video("2", "Summer Nights", "Romance");
        assert!(find_related(Some(&current), &[other], DEFAULT_LIMIT).is_empty());
    }

    #[test]
    fn test_reference_example() {
        let current = video("1", "Hot Summer Night", "Romance");
        let catalog = vec![
            video("2", "Summer Nights", "Romance"),
            video("3", "Winter Days", "Drama"),
        ];
        let finder = RelatedFinder::default();
        let ranked = finder.rank(Some(&current), &catalog);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].video.id, "2");
        assert_eq!(ranked[0].score, 7);
    }

    #[test]
    fn test_scores_and_order() {
        let catalog = sample_catalog();
        let current = &catalog[0];
        let ranked = RelatedFinder::default().rank(Some(current), &catalog);
        let pairs: Vec<(&str, u32)> = ranked
            .iter()
            .map(|s| (s.video.id.as_str(), s.score))
            .collect();

        // 4: hot+summer+night = 6; 2: summer + Romance = 7; 5: night = 2;
        // 6: summer + Romance = 7; 7: night+summer+hot = 6; 8: Romance = 5.
        assert_eq!(
            pairs,
            vec![("2", 7), ("6", 7), ("4", 6), ("7", 6), ("8", 5), ("5", 2)]
        );
    }

    #[test]
    fn test_current_never_returned() {
        let catalog = sample_catalog();
        for current in &catalog {
            let related = find_related(Some(current), &catalog, DEFAULT_LIMIT);
            assert!(related.iter().all(|v| v.id != current.id));
        }
    }

    #[test]
    fn test_exclusion_matches_by_id_not_value() {
        let current = video("1", "Hot Summer Night", "Romance");
        let catalog = vec![
            video("1", "Completely Different", "Other"),
            video("2", "Hot Summer Night", "Romance"),
        ];
        let related = find_related(Some(&current), &catalog, DEFAULT_LIMIT);
        assert_eq!(ids(&related), vec!["2"]);
    }

    #[test]
    fn test_zero_scores_are_dropped() {
        let catalog = sample_catalog();
        let current = &catalog[0];
        let ranked = RelatedFinder::default().rank(Some(current), &catalog);
        assert!(ranked.iter().all(|s| s.score > 0));
        assert!(ranked.iter().all(|s| s.video.id != "3"));
    }

    #[test]
    fn test_repeated_candidate_keywords_count_each_time() {
        let current = video("1", "Summer", "");
        let catalog = vec![
            current.clone(),
            video("2", "Summer Summer Summer", ""),
            video("3", "Summer", ""),
        ];
        let ranked = RelatedFinder::default().rank(Some(&current), &catalog);
        assert_eq!(ranked[0].video.id, "2");
        assert_eq!(ranked[0].score, 6);
        assert_eq!(ranked[1].score, 2);
    }

    #[test]
    fn test_repeated_current_keywords_count_once() {
        let current = video("1", "Summer Summer", "");
        let catalog = vec![current.clone(), video("2", "Summer", "")];
        let ranked = RelatedFinder::default().rank(Some(&current), &catalog);
        assert_eq!(ranked[0].score, 2);
    }

    #[test]
    fn test_category_compared_whole_after_slugging() {
        let current = video("1", "Alpha", "Romantic Comedy");
        let catalog = vec![
            current.clone(),
            video("2", "Beta", "romantic   comédy"),
            video("3", "Gamma", "Comedy"),
            video("4", "Delta", "Romantic"),
        ];
        let related = find_related(Some(&current), &catalog, DEFAULT_LIMIT);
        assert_eq!(ids(&related), vec!["2"]);
    }

    #[test]
    fn test_empty_category_gives_no_bonus() {
        let current = video("1", "Alpha", "");
        let catalog = vec![current.clone(), video("2", "Beta", ""), video("3", "Gamma", "!!!")];
        assert!(find_related(Some(&current), &catalog, DEFAULT_LIMIT).is_empty());
    }

    #[test]
    fn test_missing_fields_degrade_gracefully() {
        let current = VideoRecord {
            id: "1".into(),
            ..VideoRecord::default()
        };
        let catalog = vec![current.clone(), VideoRecord::default(), video("2", "Anything", "Any")];
        assert!(find_related(Some(&current), &catalog, DEFAULT_LIMIT).is_empty());
    }

    #[test]
    fn test_limit_zero_returns_empty() {
        let catalog = sample_catalog();
        assert!(find_related(Some(&catalog[0]), &catalog, 0).is_empty());
    }

    #[test]
    fn test_limit_bounds_and_prefix() {
        let catalog = sample_catalog();
        let current = &catalog[0];
        let full = find_related(Some(current), &catalog, DEFAULT_LIMIT);
        for n in 0..=full.len() + 2 {
            let limited = find_related(Some(current), &catalog, n);
            assert!(limited.len() <= n);
            assert_eq!(ids(&limited), ids(&full[..limited.len()]));
        }
    }

    #[test]
    fn test_default_limit_truncates_large_catalogs() {
        let mut catalog: Vec<VideoRecord> = (0..50)
            .map(|i| video(&i.to_string(), "Summer Clip", "Music"))
            .collect();
        catalog.push(video("current", "Summer", "Music"));
        let current = catalog.last().cloned();

        let related = find_related(current.as_ref(), &catalog, DEFAULT_LIMIT);
        assert_eq!(related.len(), DEFAULT_LIMIT);
        // All tied: catalog order decides.
        let expected: Vec<String> = (0..DEFAULT_LIMIT).map(|i| i.to_string()).collect();
        assert_eq!(ids(&related), expected);
    }

    #[test]
    fn test_is_idempotent() {
        let catalog = sample_catalog();
        let first = find_related(Some(&catalog[0]), &catalog, DEFAULT_LIMIT);
        let second = find_related(Some(&catalog[0]), &catalog, DEFAULT_LIMIT);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_weights() {
        let weights = RelevanceWeights {
            title_keyword: 10,
            category_match: 1,
        };
        let finder = RelatedFinder::new(RelatedConfig::new().with_weights(weights)).unwrap();
        let catalog = sample_catalog();
        let ranked = finder.rank(Some(&catalog[0]), &catalog);
        assert_eq!(ranked[0].video.id, "4");
        assert_eq!(ranked[0].score, 30);
    }

    #[test]
    fn test_category_only_weights() {
        let weights = RelevanceWeights {
            title_keyword: 0,
            category_match: 5,
        };
        let finder = RelatedFinder::new(RelatedConfig::new().with_weights(weights)).unwrap();
        let catalog = sample_catalog();
        let related = finder.find(Some(&catalog[0]), &catalog);
        assert_eq!(ids(&related), vec!["2", "6", "8"]);
    }

    #[test]
    fn test_invalid_weights_rejected() {
        let config = RelatedConfig::new().with_weights(RelevanceWeights {
            title_keyword: 0,
            category_match: 0,
        });
        let err = RelatedFinder::new(config).unwrap_err();
        assert!(matches!(err, ReelmatchError::InvalidWeights(_)));
    }

    #[test]
    fn test_config_builder() {
        let config = RelatedConfig::new().with_limit(3);
        assert_eq!(config.limit, 3);
        assert_eq!(config.weights, RelevanceWeights::default());
        assert_eq!(RelatedConfig::default().limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_finder_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RelatedFinder>();
    }
}
