//! fragment-level filtering
use super::Filter;
use crate::config::Config;

/// Discards fragments that contain too many `//`.
///
/// These are mostly URLs, code listings or badly converted tables.
pub struct SlashCount {
    max: usize,
}

impl SlashCount {
    pub fn with_max(max: usize) -> Self {
        Self { max }
    }
}

impl Filter<&str> for SlashCount {
    fn detect(&self, fragment: &str) -> bool {
        fragment.matches("//").count() <= self.max
    }
}

impl Default for SlashCount {
    fn default() -> Self {
        Self::with_max(Config::default().max_slashes)
    }
}

/// Simple length filter.
/// Returns `false` if provided fragment is less than [MinLength::min_size] unicode codepoints.
///
/// [MinLength::min_size] is 300 by default.
pub struct MinLength {
    min_size: usize,
}

impl MinLength {
    /// specify a minimum length
    pub fn with_min_size(min_size: usize) -> Self {
        Self { min_size }
    }

    /// Get a reference to the length's min size.
    pub fn min_size(&self) -> &usize {
        &self.min_size
    }
}

impl Filter<&str> for MinLength {
    fn detect(&self, fragment: &str) -> bool {
        fragment.chars().count() >= self.min_size
    }
}

impl Default for MinLength {
    fn default() -> Self {
        Self::with_min_size(Config::default().min_text_len)
    }
}
