//! Fragment preprocessing.
//!
//! Chains normalization, bracket stripping and fragment filters.
//! Steps are applied in order, and any failing filter discards the fragment:
//!
//! 1. [Normalize] (may discard),
//! 1. short `(...)` spans removal,
//! 1. short `[...]` spans removal,
//! 1. `//` count filter,
//! 1. sentence length filter (on a fresh segmentation of the current text),
//! 1. whitespace collapsing,
//! 1. minimum length filter.
use log::trace;

use super::{CollapseWhitespace, Normalize, StripBrackets, TextNormalizer, Transform};
use crate::config::Config;
use crate::filtering::{fragment::MinLength, fragment::SlashCount, sentence::MaxLength, Filter};
use crate::sentences::{Segment, UnicodeSentences};

pub struct Preprocessor<N, S> {
    normalizer: N,
    segmenter: S,
    parentheses: StripBrackets,
    square_brackets: StripBrackets,
    slashes: SlashCount,
    sentence_length: MaxLength,
    whitespace: CollapseWhitespace,
    min_length: MinLength,
}

impl<N, S> Preprocessor<N, S>
where
    N: Normalize,
    S: Segment,
{
    /// Reads the cleaning thresholds from `config`.
    /// None of them can be invalid, so `config` is not validated here.
    pub fn new(config: &Config, normalizer: N, segmenter: S) -> Self {
        Self {
            normalizer,
            segmenter,
            parentheses: StripBrackets::parentheses(config.bracket_max_len),
            square_brackets: StripBrackets::square(config.bracket_max_len),
            slashes: SlashCount::with_max(config.max_slashes),
            sentence_length: MaxLength::with_max_size(config.max_sentence_len),
            whitespace: CollapseWhitespace,
            min_length: MinLength::with_min_size(config.min_text_len),
        }
    }

    /// Get a reference to the segmenter, so that callers segment the same way.
    pub fn segmenter(&self) -> &S {
        &self.segmenter
    }

    /// Cleans a candidate fragment.
    /// Returns `None` if the fragment is discarded.
    pub fn process(&self, text: &str) -> Option<String> {
        let text = self.normalizer.normalize(text)?;

        let text = self.parentheses.transform_own(text);
        let text = self.square_brackets.transform_own(text);

        if !self.slashes.detect(&text) {
            trace!("fragment discarded: too many slashes");
            return None;
        }

        if !self
            .sentence_length
            .detect_all(self.segmenter.segment(&text))
        {
            trace!("fragment discarded: sentence too long");
            return None;
        }

        let text = self.whitespace.transform_own(text);

        if !self.min_length.detect(&text) {
            trace!("fragment discarded: too short");
            return None;
        }

        Some(text)
    }
}

impl Default for Preprocessor<TextNormalizer, UnicodeSentences> {
    fn default() -> Self {
        Self::new(&Config::default(), TextNormalizer, UnicodeSentences)
    }
}
