//! Content matching for candidate files.

use super::policy::TRANSLATION_MARKERS;

/// Check whether raw file contents carry one of the built-in translation markers.
///
/// # Examples
///
/// ```
/// use stringscan::scan::matches;
///
/// assert!(matches(br#"<span data-mc-translate="title">Hi</span>"#));
/// assert!(matches(b"<Message id=\"welcome\" />"));
/// assert!(!matches(b"<message id=\"welcome\" />"));
/// ```
pub fn matches(raw: &[u8]) -> bool {
    contains_marker(raw, TRANSLATION_MARKERS)
}

/// Check whether `raw`, decoded as text, contains any of `markers`.
///
/// Plain substring search: no case folding, no whitespace normalization.
/// Invalid UTF-8 sequences are replaced before searching, which never creates
/// or hides an ASCII marker.
pub fn contains_marker<S: AsRef<str>>(raw: &[u8], markers: &[S]) -> bool {
    let text = String::from_utf8_lossy(raw);
    markers.iter().any(|marker| text.contains(marker.as_ref()))
}
