//! # Slug Normalizer
//!
//! Turns free text into a lowercase, hyphen-delimited ASCII slug used for
//! keyword comparison. The pipeline runs in a fixed order: diacritics are
//! stripped before lowercasing so that decomposed letters fold cleanly.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::Result;

/// Shared instance behind [`slugify`]. Immutable once built.
static SHARED: LazyLock<Slugifier> =
    LazyLock::new(|| Slugifier::new().expect("static slug patterns must compile"));

/// Returns `true` for the Combining Diacritical Marks block (U+0300..=U+036F).
fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Whitespace as ECMAScript defines it (WhiteSpace plus LineTerminator).
/// Includes U+FEFF and excludes U+0085, unlike Unicode `White_Space`.
const WHITESPACE_CLASS: &str = r"[\t\n\x0B\x0C\r \x{00A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

fn is_slug_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Slug normalizer holding its pre-compiled patterns.
///
/// Most callers want the [`slugify`] free function; construct a `Slugifier`
/// directly only when an owned instance is more convenient.
#[derive(Debug, Clone)]
pub struct Slugifier {
    re_whitespace: Regex,
    re_non_word: Regex,
    re_hyphen_run: Regex,
}

impl Slugifier {
    /// Constructs a new `Slugifier` with pre-compiled regex patterns.
    ///
    /// # Errors
    ///
    /// Returns `ReelmatchError::RegexError` if any pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_whitespace: Regex::new(&format!("{WHITESPACE_CLASS}+"))?,
            re_non_word: Regex::new(r"[^A-Za-z0-9_\-]+")?,
            re_hyphen_run: Regex::new(r"-{2,}")?,
        })
    }

    /// Normalizes `text` into a slug.
    ///
    /// Never fails: any input yields a (possibly empty) slug. A trailing
    /// hyphen survives when the text ends in stripped characters.
    ///
    /// # Examples
    /// ```
    /// use reelmatch_core::slug::Slugifier;
    ///
    /// let slugifier = Slugifier::new().unwrap();
    /// assert_eq!(slugifier.slugify("  Café   Society "), "cafe-society");
    /// assert_eq!(slugifier.slugify("Rock & Roll"), "rock-roll");
    /// ```
    #[must_use]
    pub fn slugify(&self, text: &str) -> String {
        let stripped: String = text.nfd().filter(|c| !is_combining_diacritic(*c)).collect();
        let lowered = stripped.to_lowercase();

        let trimmed = lowered.trim_matches(is_slug_whitespace);
        let hyphenated = self.re_whitespace.replace_all(trimmed, "-");
        let word_only = self.re_non_word.replace_all(&hyphenated, "");
        self.re_hyphen_run.replace_all(&word_only, "-").into_owned()
    }
}

/// Normalizes `text` into a slug using the shared [`Slugifier`].
///
/// # Examples
/// ```
/// use reelmatch_core::slugify;
///
/// assert_eq!(slugify("Café Society"), "cafe-society");
/// assert_eq!(slugify(""), "");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    SHARED.slugify(text)
}
