/*! Librusec pipeline types.

* !*/
mod document;
mod record;

pub use document::RawDocument;
pub use record::{Meta, Record, SOURCE};
