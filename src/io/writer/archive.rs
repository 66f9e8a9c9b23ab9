use crate::error::Error;
use crate::pipelines::librusec::types::Record;

/// Append-only record store.
pub trait Archive {
    /// Appends a record. Records must be persisted in the order they are appended.
    fn append_record(&mut self, record: &Record) -> Result<(), Error>;

    /// Flushes pending records. The archive should not be used afterwards.
    fn close(&mut self) -> Result<(), Error>;
}

/// In-memory archive.
impl Archive for Vec<Record> {
    fn append_record(&mut self, record: &Record) -> Result<(), Error> {
        self.push(record.clone());
        Ok(())
    }

    fn close(&mut self) -> Result<(), Error> {
        Ok(())
    }
}
