//! # Video Catalog
//!
//! The in-memory list of videos a site is built from, loaded from a JSON
//! array of video objects.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{ReelmatchError, Result};
use crate::scoring::RelatedFinder;
use crate::types::VideoRecord;

/// An ordered collection of videos with unique ids.
///
/// Catalog order is significant: it breaks ties between equally related
/// videos.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    videos: Vec<VideoRecord>,
}

impl Catalog {
    /// Builds a catalog from already-decoded records.
    ///
    /// # Errors
    ///
    /// Returns `ReelmatchError::DuplicateId` if two records share an id.
    pub fn new(videos: Vec<VideoRecord>) -> Result<Self> {
        check_unique_ids(&videos)?;
        debug!(videos = videos.len(), "loaded catalog");
        Ok(Self { videos })
    }

    /// Decodes a catalog from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns `ReelmatchError::Json` on malformed JSON and
    /// `ReelmatchError::DuplicateId` on repeated ids.
    ///
    /// # Examples
    /// ```
    /// use reelmatch_core::Catalog;
    ///
    /// let catalog = Catalog::from_json_str(r#"[
    ///     {"id": "1", "title": "Hot Summer Night", "category": "Romance"},
    ///     {"id": "2", "title": "Summer Nights", "category": "Romance"}
    /// ]"#).unwrap();
    /// assert_eq!(catalog.len(), 2);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::new(serde_json::from_str(json)?)
    }

    /// Decodes a catalog from a reader yielding a JSON array.
    ///
    /// # Errors
    ///
    /// Same as [`from_json_str`](Self::from_json_str); read failures surface
    /// as `ReelmatchError::Json` with an I/O category.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Self::new(serde_json::from_reader(reader)?)
    }

    /// Reads and decodes a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `ReelmatchError::Io` if the file cannot be opened, otherwise
    /// the same errors as [`from_reader`](Self::from_reader).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading catalog");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Looks up a video by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&VideoRecord> {
        self.videos.iter().find(|video| video.id == id)
    }

    /// All videos in catalog order.
    #[must_use]
    pub fn videos(&self) -> &[VideoRecord] {
        &self.videos
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VideoRecord> {
        self.videos.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Videos related to the one with `id`, ranked by `finder`.
    ///
    /// # Errors
    ///
    /// Returns `ReelmatchError::UnknownVideo` if no video has that id.
    pub fn related(&self, id: &str, finder: &RelatedFinder) -> Result<Vec<&VideoRecord>> {
        let current = self
            .get(id)
            .ok_or_else(|| ReelmatchError::UnknownVideo { id: id.to_string() })?;
        Ok(finder.find(Some(current), &self.videos))
    }
}

fn check_unique_ids(videos: &[VideoRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(videos.len());
    for video in videos {
        if !seen.insert(video.id.as_str()) {
            return Err(ReelmatchError::DuplicateId {
                id: video.id.clone(),
            });
        }
    }
    Ok(())
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a VideoRecord;
    type IntoIter = std::slice::Iter<'a, VideoRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
