/*! Fragment transformers.

Transforms fragments by removing or rewriting content.

[Preprocessor] chains the transformers with the fragment filters of [crate::filtering]
and is the only entry point the pipeline uses.
!*/

mod brackets;
mod normalizer;
mod preprocessor;
mod transform;
mod whitespace;

pub use brackets::StripBrackets;
pub use normalizer::{Normalize, TextNormalizer};
pub use preprocessor::Preprocessor;
pub use transform::Transform;
pub use whitespace::CollapseWhitespace;
