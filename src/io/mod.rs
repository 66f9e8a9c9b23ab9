/*!
# IO utilities

Reading of concatenated dumps and writing of record archives.
Both transparently handle gzip when the path ends with `.gz`.
!*/
pub mod reader;
pub mod writer;
