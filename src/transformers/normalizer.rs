//! Text normalization.
use itertools::Itertools;
use unicode_normalization::UnicodeNormalization;

/// First cleaning step applied on a fragment.
///
/// Returns `None` when the text is not worth keeping at all.
pub trait Normalize {
    fn normalize(&self, text: &str) -> Option<String>;
}

/// Default normalizer.
///
/// - NFC normalization,
/// - removal of control characters and invisible formatting characters (soft hyphens, zero-width characters, BOM),
/// - non-breaking spaces become regular spaces,
/// - lines are joined and whitespace is collapsed.
///
/// Empty results are discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextNormalizer;

impl TextNormalizer {
    fn clean_char(c: char) -> Option<char> {
        match c {
            '\u{00A0}' | '\u{2007}' | '\u{202F}' => Some(' '),
            '\u{00AD}' | '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' | '\u{FEFF}' => None,
            c if c.is_whitespace() => Some(c),
            c if c.is_control() => None,
            c => Some(c),
        }
    }
}

impl Normalize for TextNormalizer {
    fn normalize(&self, text: &str) -> Option<String> {
        let text = text
            .nfc()
            .filter_map(Self::clean_char)
            .collect::<String>()
            .split_whitespace()
            .join(" ");

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
