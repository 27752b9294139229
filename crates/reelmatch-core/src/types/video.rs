use serde::{Deserialize, Serialize};

/// One video in a site catalog.
///
/// Only `id`, `title` and `category` are read by the scorer. The remaining
/// fields are carried through so callers can render the results directly.
/// Every field defaults to an empty string when missing from the source
/// JSON, which scores as an empty keyword set rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoRecord {
    /// Opaque unique identifier, used only for identity comparison.
    pub id: String,

    /// Display title. Tokenized into keywords for scoring.
    pub title: String,

    /// Free-text description.
    pub description: String,

    /// Thumbnail image URL.
    pub thumbnail: String,

    /// Human-readable duration (e.g., "12:34").
    pub duration: String,

    /// Playback URL.
    pub video_url: String,

    /// Category label. Compared as a whole, never tokenized.
    pub category: String,
}

impl VideoRecord {
    /// Creates a record with the scored fields set and everything else empty.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            ..Self::default()
        }
    }

    /// Returns `true` if `other` refers to the same video.
    #[must_use]
    pub fn same_video(&self, other: &VideoRecord) -> bool {
        self.id == other.id
    }
}

impl std::fmt::Display for VideoRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VideoRecord(id={:?}, title={:?}", self.id, self.title)?;
        if !self.category.is_empty() {
            write!(f, ", category={:?}", self.category)?;
        }
        write!(f, ")")
    }
}
