/*! Librusec dump conversion.

The dump is read document by document ([crate::io::reader::BoundaryReader]),
and each document goes through the [Flusher]:

1. Documents with too much `...`/`!!!` are discarded,
1. The document is segmented into sentences, that are batched into fragments,
1. Each fragment is cleaned by the [crate::transformers::Preprocessor],
1. Kept fragments are appended to the archive as [types::Record]s.
!*/
mod flusher;
#[allow(clippy::module_inception)]
mod pipeline;
mod stats;
pub mod types;

pub use flusher::{DocumentReport, Flusher};
pub use pipeline::Librusec;
pub use stats::Stats;
