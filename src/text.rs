/// Collapse every whitespace run (spaces, tabs, newlines) to a single space
/// and trim the ends. Total and idempotent.
pub fn normalize_spaces(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The first `max` characters of `s`, never splitting a code point.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Length in characters, not bytes. Length bounds and truncation limits are
/// all expressed in characters so CJK text is measured the same as Latin.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
