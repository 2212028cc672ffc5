//! Utility functions for string processing.

/// Lowercase and collapse whitespace. Used to record the session's last query.
///
/// No diacritic folding: "Café" stays "café".
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shorten `text` to at most `max_chars` characters, appending `...` when cut.
///
/// Cuts on a char boundary, never inside a multi-byte sequence.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}
