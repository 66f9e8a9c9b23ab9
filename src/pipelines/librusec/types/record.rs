use serde::{Deserialize, Serialize};

/// Source name written in every record.
pub const SOURCE: &str = "librusec";

/// Provenance of a [Record].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    source: String,
    text_id: String,
    fragment_num: usize,
}

impl Meta {
    pub fn new(text_id: String, fragment_num: usize) -> Self {
        Self {
            source: SOURCE.to_string(),
            text_id,
            fragment_num,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn text_id(&self) -> &str {
        &self.text_id
    }

    pub fn fragment_num(&self) -> usize {
        self.fragment_num
    }
}

/// A cleaned fragment along with its provenance.
///
/// Records are only built from fragments that went through every filter,
/// and are not modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    text: String,
    meta: Meta,
}

impl Record {
    pub fn new(text: String, text_id: String, fragment_num: usize) -> Self {
        Self {
            text,
            meta: Meta::new(text_id, fragment_num),
        }
    }

    /// Get a reference to the record's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get a reference to the record's metadata.
    pub fn meta(&self) -> &Meta {
        &self.meta
    }
}
