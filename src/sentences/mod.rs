/*! Sentence handling.

Splitting text into sentences is done through the [Segment] trait, so that the pipeline
does not depend on a particular segmentation algorithm.
[UnicodeSentences] is the default one, following UAX #29.

Sentences are then grouped into bounded [Fragment]s by the [Batcher].
!*/
mod batcher;
mod segmenter;

pub use batcher::{Batcher, Fragment};
pub use segmenter::{Segment, UnicodeSentences};
