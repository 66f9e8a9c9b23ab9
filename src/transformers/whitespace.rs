//! Whitespace collapsing.
use itertools::Itertools;

use super::Transform;

/// Collapses any run of unicode whitespace into a single space,
/// and trims leading and trailing whitespace.
#[derive(Debug, Default, Clone, Copy)]
pub struct CollapseWhitespace;

impl Transform for CollapseWhitespace {
    fn transform_own(&self, text: String) -> String {
        text.split_whitespace().join(" ")
    }
}
