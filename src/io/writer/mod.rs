/*!
# Record archives

Records are appended one at a time, in production order, so that an interrupted run
still leaves a valid (if incomplete) archive behind.

[Archive] is the trait the pipeline writes to. [JsonlArchive] is the on-disk implementation,
writing one JSON object per line.
!*/
mod archive;
mod jsonl;

pub use archive::Archive;
pub use jsonl::{JsonlArchive, Sink};
