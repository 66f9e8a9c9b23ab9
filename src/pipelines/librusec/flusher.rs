//! Document flushing.
use log::trace;

use super::types::{RawDocument, Record};
use crate::config::Config;
use crate::error::Error;
use crate::filtering::{document::PunctuationSpam, Filter};
use crate::io::writer::Archive;
use crate::sentences::{Batcher, Segment, UnicodeSentences};
use crate::transformers::{Normalize, Preprocessor, TextNormalizer};

/// What happened to a flushed document.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DocumentReport {
    /// `true` if the whole document was discarded before segmentation.
    pub discarded: bool,
    /// Number of candidate fragments.
    pub fragments: usize,
    /// Number of records written.
    pub records: usize,
}

/// Turns a [RawDocument] into records.
pub struct Flusher<N, S> {
    spam: PunctuationSpam,
    batcher: Batcher,
    preprocessor: Preprocessor<N, S>,
}

impl<N, S> Flusher<N, S>
where
    N: Normalize,
    S: Segment,
{
    /// Fails with [Error::Config] if `config` does not pass [Config::validate].
    pub fn new(config: &Config, normalizer: N, segmenter: S) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self::from_valid(config, normalizer, segmenter))
    }

    fn from_valid(config: &Config, normalizer: N, segmenter: S) -> Self {
        Self {
            spam: PunctuationSpam::from_config(config),
            batcher: Batcher::new(config.batch_size),
            preprocessor: Preprocessor::new(config, normalizer, segmenter),
        }
    }

    /// Filters, segments and cleans the document, appending kept fragments to `archive`.
    ///
    /// Discarded documents or fragments are not errors.
    /// Errors only come from the archive.
    pub fn flush<A: Archive>(
        &self,
        doc: &RawDocument,
        archive: &mut A,
    ) -> Result<DocumentReport, Error> {
        let mut report = DocumentReport::default();
        let full_text = doc.full_text();

        if !self.spam.detect(&full_text) {
            trace!("document {} discarded", doc.text_id());
            report.discarded = true;
            return Ok(report);
        }

        let sentences = self.preprocessor.segmenter().segment(&full_text);

        for fragment in self.batcher.batches(&sentences) {
            report.fragments += 1;
            let cleaned = match self.preprocessor.process(&fragment.text()) {
                Some(cleaned) => cleaned,
                None => {
                    trace!(
                        "document {} fragment {} discarded",
                        doc.text_id(),
                        fragment.fragment_num
                    );
                    continue;
                }
            };

            let record = Record::new(cleaned, doc.text_id().to_string(), fragment.fragment_num);
            archive.append_record(&record)?;
            report.records += 1;
        }

        Ok(report)
    }
}

impl Default for Flusher<TextNormalizer, UnicodeSentences> {
    fn default() -> Self {
        Self::from_valid(&Config::default(), TextNormalizer, UnicodeSentences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROSE: &str = "Утро выдалось холодным и ясным. Иван Петрович вышел на крыльцо, \
    посмотрел на небо и решил, что дождя сегодня не будет. Он неторопливо спустился \
    к реке, где у старой пристани его уже ждала лодка. Вода была тихой, и только \
    редкие круги от рыбы нарушали её гладкую поверхность. Он сел на вёсла и \
    оттолкнулся от берега, думая о том, как давно не выбирался на рыбалку.";

    /// One segment per `|`-separated chunk, so that tests control sentence boundaries.
    struct PipeSegmenter;

    impl Segment for PipeSegmenter {
        fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
            text.split('|')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect()
        }
    }

    fn doc(text_id: &str, lines: &[&str]) -> RawDocument {
        RawDocument::new(
            text_id.to_string(),
            lines.iter().map(|l| l.to_string()).collect(),
        )
    }

    #[test]
    fn single_fragment() {
        let f = Flusher::default();
        let mut archive: Vec<Record> = Vec::new();

        let report = f.flush(&doc("42", &[PROSE]), &mut archive).unwrap();

        assert_eq!(
            report,
            DocumentReport {
                discarded: false,
                fragments: 1,
                records: 1
            }
        );
        assert_eq!(archive.len(), 1);
        assert_eq!(archive[0].text(), PROSE);
        assert_eq!(archive[0].meta().text_id(), "42");
        assert_eq!(archive[0].meta().fragment_num(), 0);
        assert_eq!(archive[0].meta().source(), "librusec");
    }

    #[test]
    fn lines_are_joined() {
        let f = Flusher::default();
        let mut archive: Vec<Record> = Vec::new();
        let (first, second) = PROSE.split_at(PROSE.find("Он неторопливо").unwrap());

        f.flush(&doc("1", &[first.trim(), second]), &mut archive)
            .unwrap();

        assert_eq!(archive.len(), 1);
        assert_eq!(archive[0].text(), PROSE);
    }

    #[test]
    fn batches_of_850_sentences() {
        let config = Config {
            min_text_len: 0,
            max_sentence_len: usize::MAX,
            ..Default::default()
        };
        let f = Flusher::new(&config, TextNormalizer, PipeSegmenter).unwrap();
        let sentences: Vec<String> = (0..850).map(|i| format!("s{}", i)).collect();
        let line = sentences.join("|");
        let mut archive: Vec<Record> = Vec::new();

        let report = f.flush(&doc("7", &[line.as_str()]), &mut archive).unwrap();
        assert_eq!(report.fragments, 3);
        assert_eq!(report.records, 3);

        let nums: Vec<usize> = archive.iter().map(|r| r.meta().fragment_num()).collect();
        assert_eq!(nums, vec![0, 1, 2]);

        assert_eq!(archive[0].text(), sentences[0..400].join(" "));
        assert_eq!(archive[1].text(), sentences[400..800].join(" "));
        assert_eq!(archive[2].text(), sentences[800..850].join(" "));
    }

    #[test]
    fn rejected_fragments_keep_their_slot() {
        let config = Config {
            batch_size: 1,
            ..Default::default()
        };
        let f = Flusher::new(&config, TextNormalizer, PipeSegmenter).unwrap();
        let line = format!("{}|too short|{}", PROSE, PROSE);
        let mut archive: Vec<Record> = Vec::new();

        let report = f.flush(&doc("3", &[line.as_str()]), &mut archive).unwrap();
        assert_eq!(report.fragments, 3);
        assert_eq!(report.records, 2);

        let nums: Vec<usize> = archive.iter().map(|r| r.meta().fragment_num()).collect();
        assert_eq!(nums, vec![0, 2]);
    }

    #[test]
    fn ellipsis_spam() {
        let f = Flusher::default();
        let mut archive: Vec<Record> = Vec::new();
        let spam = format!("{} {}", PROSE, "Ну... ".repeat(101));

        let report = f.flush(&doc("5", &[spam.as_str()]), &mut archive).unwrap();
        assert!(report.discarded);
        assert!(archive.is_empty());
    }

    #[test]
    fn exclamation_spam_across_lines() {
        let f = Flusher::default();
        let mut archive: Vec<Record> = Vec::new();
        let mut lines = vec![PROSE];
        lines.extend(std::iter::repeat("Ура!!!").take(101));

        let report = f.flush(&doc("5", &lines), &mut archive).unwrap();
        assert!(report.discarded);
        assert!(archive.is_empty());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = Config {
            batch_size: 0,
            ..Default::default()
        };
        let f = Flusher::new(&config, TextNormalizer, PipeSegmenter);
        assert!(matches!(f, Err(Error::Config(_))));
    }

    #[test]
    fn empty_document() {
        let f = Flusher::default();
        let mut archive: Vec<Record> = Vec::new();

        let report = f.flush(&doc("9", &[""]), &mut archive).unwrap();
        assert_eq!(report, DocumentReport::default());
        assert!(archive.is_empty());
    }
}
