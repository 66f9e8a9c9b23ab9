//! Groups sentences into fragments.
use crate::config::Config;

/// A batch of consecutive sentences of a single document.
///
/// `fragment_num` is the position of the batch among *all* the batches of its document,
/// whether later steps keep it or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<'a> {
    pub fragment_num: usize,
    pub sentences: &'a [&'a str],
}

impl<'a> Fragment<'a> {
    /// Candidate text of the fragment: sentences joined by single spaces.
    pub fn text(&self) -> String {
        self.sentences.join(" ")
    }
}

/// Partitions sentences into fragments of at most `batch_size` sentences.
/// The last fragment may be shorter.
#[derive(Debug, Clone, Copy)]
pub struct Batcher {
    batch_size: usize,
}

impl Batcher {
    /// Panics if `batch_size` is 0.
    /// [crate::pipelines::librusec::Flusher::new] validates the configuration before building one.
    pub fn new(batch_size: usize) -> Self {
        assert!(batch_size > 0, "batch_size must be > 0");
        Self { batch_size }
    }

    pub fn batches<'a>(&self, sentences: &'a [&'a str]) -> impl Iterator<Item = Fragment<'a>> {
        sentences
            .chunks(self.batch_size)
            .enumerate()
            .map(|(fragment_num, sentences)| Fragment {
                fragment_num,
                sentences,
            })
    }
}

impl Default for Batcher {
    /// 400 sentences per fragment.
    fn default() -> Self {
        Self::new(Config::default().batch_size)
    }
}
