use std::fmt;

use super::DocumentReport;

/// Run counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Documents read from the dump.
    pub documents: usize,
    /// Documents discarded as a whole.
    pub discarded_documents: usize,
    /// Candidate fragments, kept or not.
    pub fragments: usize,
    /// Records written.
    pub records: usize,
}

impl Stats {
    pub fn add(&mut self, report: &DocumentReport) {
        self.documents += 1;
        if report.discarded {
            self.discarded_documents += 1;
        }
        self.fragments += report.fragments;
        self.records += report.records;
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} documents ({} discarded), {} fragments, {} records",
            self.documents, self.discarded_documents, self.fragments, self.records
        )
    }
}
