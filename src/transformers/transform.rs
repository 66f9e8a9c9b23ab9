//! Transform trait.

/// Rewrites a fragment.
///
/// Transforms never discard content on their own, see [crate::filtering] for that.
pub trait Transform {
    /// Takes ownership of the text and returns it.
    fn transform_own(&self, text: String) -> String;
}
