//! Removes short bracketed annotations.
//!
//! Footnote marks, page numbers and editorial notes are usually short bracketed spans:
//! ```text
//! Он вернулся домой (1) поздно вечером [см. прим.] и лёг спать.
//! ```
//! will be transformed into
//! ```text
//! Он вернулся домой   поздно вечером   и лёг спать.
//! ```
//! Longer spans are kept since they are likely to be actual content.
//!
//! Spans are not nesting-aware: a span goes from an opening bracket to the first closing one.
//! Each short span is removed *everywhere* in the text, not only where it was found.
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

use super::Transform;
use crate::config::Config;

lazy_static! {
    static ref PARENTHESES: Regex = Regex::new(r"\([^)]*\)").unwrap();
    static ref SQUARE_BRACKETS: Regex = Regex::new(r"\[[^\]]*\]").unwrap();
}

pub struct StripBrackets {
    pattern: &'static Regex,
    max_len: usize,
}

impl StripBrackets {
    /// Strips `(...)` spans of at most `max_len` characters, parentheses included.
    pub fn parentheses(max_len: usize) -> Self {
        Self {
            pattern: &PARENTHESES,
            max_len,
        }
    }

    /// Strips `[...]` spans of at most `max_len` characters, brackets included.
    pub fn square(max_len: usize) -> Self {
        Self {
            pattern: &SQUARE_BRACKETS,
            max_len,
        }
    }

    /// distinct short spans, in order of first appearance.
    fn short_spans(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|span| span.chars().count() <= self.max_len)
            .unique()
            .map(String::from)
            .collect()
    }
}

impl Transform for StripBrackets {
    fn transform_own(&self, text: String) -> String {
        // spans are collected on the untouched text before any replacement
        let spans = self.short_spans(&text);
        spans
            .iter()
            .fold(text, |text, span| text.replace(span.as_str(), " "))
    }
}

impl Default for StripBrackets {
    fn default() -> Self {
        Self::parentheses(Config::default().bracket_max_len)
    }
}
