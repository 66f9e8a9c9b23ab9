/*! Concatenated dump reader.

The dump is a plain text stream where each document starts with a boundary marker line:
```text
1234.fb2 first line of document 1234
second line of document 1234
1235.fb2 first line of document 1235
```
A marker is a digit run immediately followed by `.fb2`, at the beginning of a line.
The digit run becomes the document id, and the rest of the line
(minus one separator character) is appended to the document.

Lines found before the first marker are kept and become the first lines of the first document.
If the dump holds no marker at all, they are dropped.
 * !*/
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::mem;
use std::path::Path;

use flate2::read::MultiGzDecoder;
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use crate::error::Error;
use crate::pipelines::librusec::types::RawDocument;

lazy_static! {
    static ref BOUNDARY: Regex = Regex::new(r"^(\d+)\.fb2").unwrap();
}

/// Reader state.
#[derive(Debug)]
enum State {
    /// No marker seen yet. Holds the lines read so far.
    NoDocument(Vec<String>),
    Open(RawDocument),
    Done,
}

/// Iterates over the documents of a dump, one line at a time.
///
/// Only the lines of the current document (and, before the first marker, the lines read so far)
/// are kept in memory.
#[derive(Debug)]
pub struct BoundaryReader<R> {
    lines: Lines<R>,
    state: State,
}

impl<R: BufRead> BoundaryReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            state: State::NoDocument(Vec::new()),
        }
    }
}

impl BoundaryReader<Box<dyn BufRead>> {
    /// Open a dump, decompressing it on the fly if its extension is `.gz`.
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let f = File::open(src)?;
        let reader: Box<dyn BufRead> = if src.extension().map_or(false, |ext| ext == "gz") {
            debug!("reading {:?} as gzip", src);
            Box::new(BufReader::new(MultiGzDecoder::new(f)))
        } else {
            Box::new(BufReader::new(f))
        };

        Ok(Self::new(reader))
    }
}

/// Splits a marker line into the document id and the first content line.
fn parse_marker(line: &str) -> Option<(&str, &str)> {
    let caps = BOUNDARY.captures(line)?;
    let text_id = caps.get(1)?.as_str();
    let marker_end = caps.get(0)?.end();

    // skip the separator
    let mut rest = line[marker_end..].chars();
    rest.next();

    Some((text_id, rest.as_str()))
}

impl<R: BufRead> BoundaryReader<R> {
    /// Opens a new document, returning the one that was open if any.
    fn open(&mut self, text_id: String, first_line: String) -> Option<RawDocument> {
        let (lines, previous) = match mem::replace(&mut self.state, State::Done) {
            State::NoDocument(mut lines) => {
                if !lines.is_empty() {
                    debug!(
                        "{} lines before the first marker go to document {}",
                        lines.len(),
                        text_id
                    );
                }
                lines.push(first_line);
                (lines, None)
            }
            State::Open(doc) => (vec![first_line], Some(doc)),
            State::Done => (vec![first_line], None),
        };

        self.state = State::Open(RawDocument::new(text_id, lines));
        previous
    }

    /// End of stream: returns the document that was open if any.
    fn finish(&mut self) -> Option<RawDocument> {
        match mem::replace(&mut self.state, State::Done) {
            State::Open(doc) => Some(doc),
            State::NoDocument(lines) => {
                if !lines.is_empty() {
                    warn!("no document marker found, dropping {} lines", lines.len());
                }
                None
            }
            State::Done => None,
        }
    }
}

impl<R: BufRead> Iterator for BoundaryReader<R> {
    type Item = Result<RawDocument, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next() {
                Some(Ok(line)) => match parse_marker(&line)
                    .map(|(text_id, first_line)| (text_id.to_string(), first_line.to_string()))
                {
                    Some((text_id, first_line)) => {
                        if let Some(previous) = self.open(text_id, first_line) {
                            return Some(Ok(previous));
                        }
                    }
                    None => match &mut self.state {
                        State::Open(doc) => doc.push_line(line),
                        State::NoDocument(lines) => lines.push(line),
                        State::Done => (),
                    },
                },
                Some(Err(e)) => return Some(Err(Error::Io(e))),
                None => return self.finish().map(Ok),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use flate2::write::GzEncoder;
    use flate2::Compression;

    use super::*;

    fn read_all(input: &str) -> Vec<RawDocument> {
        BoundaryReader::new(Cursor::new(input))
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    fn lines(doc: &RawDocument) -> Vec<&str> {
        doc.lines().iter().map(String::as_str).collect()
    }

    #[test]
    fn two_documents() {
        let docs = read_all("1.fb2 foo\nbar\n2.fb2 baz\n");
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].text_id(), "1");
        assert_eq!(lines(&docs[0]), vec!["foo", "bar"]);
        assert_eq!(docs[1].text_id(), "2");
        assert_eq!(lines(&docs[1]), vec!["baz"]);
    }

    #[test]
    fn no_trailing_newline() {
        let docs = read_all("10.fb2 foo\nbar");
        assert_eq!(docs.len(), 1);
        assert_eq!(lines(&docs[0]), vec!["foo", "bar"]);
    }

    #[test]
    fn bare_marker() {
        let docs = read_all("10.fb2\nfoo\n11.fb2\n");
        assert_eq!(docs.len(), 2);
        assert_eq!(lines(&docs[0]), vec!["", "foo"]);
        assert_eq!(lines(&docs[1]), vec![""]);
    }

    #[test]
    fn separator_is_a_single_char() {
        let docs = read_all("5.fb2:  foo\n6.fb2жbar\n");
        assert_eq!(lines(&docs[0]), vec![" foo"]);
        assert_eq!(lines(&docs[1]), vec!["bar"]);
    }

    #[test]
    fn marker_must_start_the_line() {
        let docs = read_all("1.fb2 foo\n see 2.fb2 bar\n.fb2 baz\n3fb2 quux\n");
        assert_eq!(docs.len(), 1);
        assert_eq!(
            lines(&docs[0]),
            vec!["foo", " see 2.fb2 bar", ".fb2 baz", "3fb2 quux"]
        );
    }

    #[test]
    fn lines_before_first_marker_join_first_document() {
        let docs = read_all("preamble\n1.fb2 foo\nbar\n2.fb2 baz\n");
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].text_id(), "1");
        assert_eq!(lines(&docs[0]), vec!["preamble", "foo", "bar"]);
        assert_eq!(docs[1].text_id(), "2");
        assert_eq!(lines(&docs[1]), vec!["baz"]);
    }

    #[test]
    fn no_marker() {
        assert!(read_all("just\nsome\ntext\n").is_empty());
        assert!(read_all("").is_empty());
    }

    #[test]
    fn fused() {
        let mut reader = BoundaryReader::new(Cursor::new("1.fb2 foo\n"));
        assert!(reader.next().is_some());
        assert!(reader.next().is_none());
        assert!(reader.next().is_none());
    }

    #[test]
    fn invalid_utf8() {
        let input: &[u8] = b"1.fb2 foo\n\xff\xfe\n";
        let results: Vec<_> = BoundaryReader::new(Cursor::new(input)).collect();
        assert!(results.iter().any(|r| matches!(r, Err(Error::Io(_)))));
    }

    #[test]
    fn gzip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dump.txt.gz");

        let mut enc = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        enc.write_all("1.fb2 foo\nbar\n2.fb2 baz\n".as_bytes())
            .unwrap();
        enc.finish().unwrap();

        let docs = BoundaryReader::from_path(&path)
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(lines(&docs[1]), vec!["baz"]);
    }
}
