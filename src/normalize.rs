//! Reduction of raw input to its canonical form.

/// Uppercase `input` and delete every character that is not an ASCII letter
/// or digit.
///
/// Surrounding junk, internal separators and whitespace all disappear here,
/// so the grammar matchers only ever see `[A-Z0-9]+`. The case mapping is the
/// locale-independent Unicode one, and no length cap is applied.
///
/// Returns `None` when nothing survives, so empty, whitespace-only and
/// all-punctuation input fail before any grammar is consulted.
pub(crate) fn normalize(input: &str) -> Option<String> {
    let canonical: String = input
        .chars()
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_alphanumeric)
        .collect();
    (!canonical.is_empty()).then_some(canonical)
}
