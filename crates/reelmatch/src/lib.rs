//! # Reelmatch
//!
//! Related-video recommendations for static video listing sites.
//! See [`reelmatch_core`] for the full API.
pub use reelmatch_core::*;
