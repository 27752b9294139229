use thiserror::Error;

/// Errors that can occur during Reelmatch core operations.
///
/// Slugging and scoring are total; only catalog loading and finder
/// construction can fail.
#[derive(Debug, Error)]
pub enum ReelmatchError {
    /// The catalog JSON could not be decoded.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// Two catalog records share the same id.
    #[error("duplicate video id in catalog: {id:?}")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },

    /// No catalog record has the requested id.
    #[error("no video with id {id:?} in catalog")]
    UnknownVideo {
        /// The id that was looked up.
        id: String,
    },

    /// The relevance weights cannot produce a positive score.
    #[error("invalid relevance weights: {0}")]
    InvalidWeights(String),

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),
}

/// Result type alias for Reelmatch operations.
pub type Result<T> = std::result::Result<T, ReelmatchError>;
