/*! # librusec

Turns a concatenated fb2 text dump into cleaned corpus records.

The dump is split into documents by [io::reader::BoundaryReader],
each document is cut into sentence batches by [sentences::Batcher]
and cleaned by [transformers::Preprocessor], and kept fragments are appended to an [io::writer::Archive].

[pipelines::Librusec] wires everything together.
!*/
pub mod config;
pub mod error;
pub mod filtering;
pub mod io;
pub mod pipelines;
pub mod sentences;
pub mod transformers;
