//! sentence-level filtering
use super::Filter;
use crate::config::Config;

/// Maximum length filter.
/// Returns `false` if provided sentence is more than `max_size` unicode codepoints.
///
/// Overly long sentences usually mean that segmentation failed
/// (tables, lists without punctuation, verse).
///
/// `max_size` is 1500 by default.
pub struct MaxLength {
    max_size: usize,
}

impl MaxLength {
    /// specify a maximum length
    pub fn with_max_size(max_size: usize) -> Self {
        Self { max_size }
    }

    /// Returns `true` if every sentence passes.
    pub fn detect_all<'a, I>(&self, sentences: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        sentences.into_iter().all(|sentence| self.detect(sentence))
    }
}

impl Filter<&str> for MaxLength {
    fn detect(&self, sentence: &str) -> bool {
        sentence.chars().count() <= self.max_size
    }
}

impl Default for MaxLength {
    /// Default maximum length for sentences is 1500 Unicode Codepoints
    fn default() -> Self {
        Self::with_max_size(Config::default().max_sentence_len)
    }
}
