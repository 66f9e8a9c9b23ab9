//! Librusec conversion pipeline
//!
//! Single pass over the dump: documents are read, flushed and forgotten one at a time,
//! so that memory usage is bounded by the size of the largest document.
//!
//! Records are written as soon as they are produced.
//! An interrupted run leaves a valid but incomplete archive, and a rerun replaces it.
use std::io::BufRead;
use std::path::PathBuf;

use log::{debug, info};

use super::{Flusher, Stats};
use crate::config::Config;
use crate::error::Error;
use crate::io::reader::BoundaryReader;
use crate::io::writer::{Archive, JsonlArchive};
use crate::pipelines::pipeline::Pipeline;
use crate::sentences::{Segment, UnicodeSentences};
use crate::transformers::{Normalize, TextNormalizer};

pub struct Librusec {
    src: PathBuf,
    dst: PathBuf,
    config: Config,
}

impl Librusec {
    pub fn new(src: PathBuf, dst: PathBuf, config: Config) -> Self {
        debug!("using config {:?}", config);
        Self { src, dst, config }
    }

    /// Runs the pipeline on any line stream and archive.
    pub fn process<R, A, N, S>(
        &self,
        reader: BoundaryReader<R>,
        archive: &mut A,
        flusher: &Flusher<N, S>,
    ) -> Result<Stats, Error>
    where
        R: BufRead,
        A: Archive,
        N: Normalize,
        S: Segment,
    {
        let mut stats = Stats::default();

        for doc in reader {
            let doc = doc?;
            let report = flusher.flush(&doc, archive)?;
            stats.add(&report);

            if self.config.progress_every > 0 && stats.documents % self.config.progress_every == 0
            {
                info!("{}", stats);
            }
        }

        archive.close()?;
        Ok(stats)
    }
}

impl Pipeline<Stats> for Librusec {
    fn run(&self) -> Result<Stats, Error> {
        self.config.validate()?;

        info!("reading {:?}", self.src);
        let reader = BoundaryReader::from_path(&self.src)?;
        let mut archive = JsonlArchive::from_path(&self.dst)?;
        let flusher = Flusher::new(&self.config, TextNormalizer, UnicodeSentences)?;

        let stats = self.process(reader, &mut archive, &flusher)?;
        info!("done: {}", stats);
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::pipelines::librusec::types::Record;

    const PROSE: &str = "Утро выдалось холодным и ясным. Иван Петрович вышел на крыльцо, \
    посмотрел на небо и решил, что дождя сегодня не будет. Он неторопливо спустился \
    к реке, где у старой пристани его уже ждала лодка. Вода была тихой, и только \
    редкие круги от рыбы нарушали её гладкую поверхность. Он сел на вёсла и \
    оттолкнулся от берега, думая о том, как давно не выбирался на рыбалку.";

    #[test]
    fn stream() {
        let input = format!(
            "preamble\n1.fb2 {}\n2.fb2 too short\n3.fb2 {}\n{}\n",
            PROSE,
            PROSE,
            "Ну... ".repeat(101)
        );
        let p = Librusec::new(PathBuf::new(), PathBuf::new(), Config::default());
        let mut archive: Vec<Record> = Vec::new();

        let stats = p
            .process(
                BoundaryReader::new(Cursor::new(input)),
                &mut archive,
                &Flusher::default(),
            )
            .unwrap();

        assert_eq!(
            stats,
            Stats {
                documents: 3,
                discarded_documents: 1,
                fragments: 2,
                records: 1
            }
        );
        assert_eq!(archive.len(), 1);
        assert_eq!(archive[0].meta().text_id(), "1");
        // lines before the first marker belong to the first document
        assert_eq!(archive[0].text(), format!("preamble {}", PROSE));
    }
}
