/*! Filtering utilities

Filters can operate on document, fragment or sentence level.

Filters implement [filter::Filter], and are pure: they never rewrite content,
they only tell if it is kept (`true`) or discarded (`false`).

- [document::PunctuationSpam] discards whole documents before segmentation,
- [fragment::SlashCount] and [fragment::MinLength] discard candidate fragments,
- [sentence::MaxLength] discards fragments through their sentences.
! */
pub mod document;
mod filter;
pub mod fragment;
pub mod sentence;

pub use filter::Filter;
