use serde::{Deserialize, Serialize};

/// Default relevance weights.
pub const WEIGHT_TITLE_KEYWORD: u32 = 2;
pub const WEIGHT_CATEGORY_MATCH: u32 = 5;

/// Points awarded for each relevance signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelevanceWeights {
    /// Added once per candidate title keyword found in the current title.
    pub title_keyword: u32,
    /// Added once when both categories slugify to the same non-empty value.
    pub category_match: u32,
}

impl Default for RelevanceWeights {
    fn default() -> Self {
        Self {
            title_keyword: WEIGHT_TITLE_KEYWORD,
            category_match: WEIGHT_CATEGORY_MATCH,
        }
    }
}

impl RelevanceWeights {
    /// Returns `false` when no signal can ever produce a positive score.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.title_keyword > 0 || self.category_match > 0
    }

    /// Computes a candidate's total score from its raw signal counts.
    #[must_use]
    pub fn score(&self, keyword_matches: u32, category_matches: bool) -> u32 {
        let category = if category_matches {
            self.category_match
        } else {
            0
        };
        self.title_keyword
            .saturating_mul(keyword_matches)
            .saturating_add(category)
    }
}
