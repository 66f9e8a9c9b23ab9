/// Raw lines of a single document of the dump, as found between two boundary markers.
///
/// `text_id` is the digit run of the marker. It is unique in practice, but this is not enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    text_id: String,
    lines: Vec<String>,
}

impl RawDocument {
    pub fn new(text_id: String, lines: Vec<String>) -> Self {
        Self { text_id, lines }
    }

    pub fn push_line(&mut self, line: String) {
        self.lines.push(line);
    }

    /// Get a reference to the document's text id.
    pub fn text_id(&self) -> &str {
        &self.text_id
    }

    /// Get a reference to the document's lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines joined by a single space.
    pub fn full_text(&self) -> String {
        self.lines.join(" ")
    }
}
