//! Sentence segmentation.
use unicode_segmentation::UnicodeSegmentation;

/// Splits a text into an ordered sequence of sentences.
///
/// Implementations have to be deterministic and total: any unicode text
/// yields a (possibly empty) sequence, never an error.
pub trait Segment {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// UAX #29 sentence segmentation.
///
/// Sentences are trimmed, and whitespace-only ones are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeSentences;

impl Segment for UnicodeSentences {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .collect()
    }
}
