//! JSON Lines archive.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use log::{debug, info};

use super::Archive;
use crate::error::Error;
use crate::pipelines::librusec::types::Record;

/// Output file, compressed or not.
pub enum Sink {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl Sink {
    /// Create (or truncate) the file at `dst`.
    /// The file is gzip-compressed if its extension is `.gz`.
    pub fn create(dst: &Path) -> std::io::Result<Self> {
        info!("creating {:?}", dst);
        let f = BufWriter::new(File::create(dst)?);
        if dst.extension().map_or(false, |ext| ext == "gz") {
            debug!("writing {:?} as gzip", dst);
            Ok(Sink::Gzip(GzEncoder::new(f, Compression::default())))
        } else {
            Ok(Sink::Plain(f))
        }
    }

    /// Writes any remaining data (and gzip trailer).
    pub fn finish(&mut self) -> std::io::Result<()> {
        match self {
            Sink::Plain(w) => w.flush(),
            Sink::Gzip(w) => {
                w.try_finish()?;
                w.get_mut().flush()
            }
        }
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            Sink::Plain(w) => w.write(buf),
            Sink::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Sink::Plain(w) => w.flush(),
            Sink::Gzip(w) => w.flush(),
        }
    }
}

/// Writes records as JSON, one per line:
///
/// ```json
/// {"text":"...","meta":{"source":"librusec","text_id":"1234","fragment_num":0}}
/// ```
///
/// Non-ASCII characters are written as is.
pub struct JsonlArchive {
    handle: Sink,
    nb_records: u64,
}

impl JsonlArchive {
    pub fn new(handle: Sink) -> Self {
        Self {
            handle,
            nb_records: 0,
        }
    }

    /// Create the archive at `dst`, replacing any existing file.
    pub fn from_path(dst: &Path) -> Result<Self, Error> {
        Ok(Self::new(Sink::create(dst)?))
    }

    /// Number of records appended so far.
    pub fn nb_records(&self) -> u64 {
        self.nb_records
    }
}

impl Archive for JsonlArchive {
    fn append_record(&mut self, record: &Record) -> Result<(), Error> {
        serde_json::to_writer(&mut self.handle, record)?;
        self.handle.write_all(b"\n")?;
        self.nb_records += 1;
        Ok(())
    }

    /// Binds to [Sink::finish] so that gzip archives get their trailer.
    fn close(&mut self) -> Result<(), Error> {
        debug!("closing archive after {} records", self.nb_records);
        self.handle.finish()?;
        Ok(())
    }
}
