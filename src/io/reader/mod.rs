/*! Dump reading utilities

[BoundaryReader] turns a concatenated dump into a stream of [crate::pipelines::librusec::types::RawDocument].
!*/
mod boundary;

pub use boundary::BoundaryReader;
