//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait that enables easy and flexible pipeline creation,
//! and the [librusec::Librusec] pipeline that converts fb2 text dumps into corpus records.
pub mod librusec;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use librusec::Librusec;
pub use pipeline::Pipeline;
