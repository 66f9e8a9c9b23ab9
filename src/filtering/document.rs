//! Document-level filtering.
use log::trace;

use super::Filter;
use crate::config::Config;

/// Filters out documents that repeat a punctuation pattern too often.
///
/// Long runs of `...` or `!!!` are a good sign of garbled or non-prose content
/// (forum dumps, poetry with stylised punctuation, broken conversions).
///
/// Occurrences are counted without overlap: `......` holds two `...`.
pub struct PunctuationSpam {
    patterns: Vec<(&'static str, usize)>,
}

impl PunctuationSpam {
    pub fn new(max_ellipsis: usize, max_exclamations: usize) -> Self {
        Self {
            patterns: vec![("...", max_ellipsis), ("!!!", max_exclamations)],
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_ellipsis, config.max_exclamations)
    }
}

impl Filter<&str> for PunctuationSpam {
    fn detect(&self, text: &str) -> bool {
        for (pattern, max) in &self.patterns {
            let count = text.matches(pattern).count();
            if count > *max {
                trace!("{} occurrences of {:?} (max {})", count, pattern, max);
                return false;
            }
        }
        true
    }
}

impl Default for PunctuationSpam {
    /// 100 ellipsis and 100 triple exclamation marks at most.
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
