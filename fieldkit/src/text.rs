//! Char-indexed string edits. Carets are char offsets, never byte offsets.

/// Convert character index to byte index in a string.
pub(crate) fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Insert `c` before char `char_idx` (appends past the end).
pub(crate) fn insert_char(s: &mut String, char_idx: usize, c: char) {
    let byte_idx = char_to_byte_index(s, char_idx);
    s.insert(byte_idx, c);
}

/// Remove the char at `char_idx`, if any.
pub(crate) fn remove_char(s: &mut String, char_idx: usize) -> Option<char> {
    if char_idx >= char_len(s) {
        return None;
    }
    let byte_idx = char_to_byte_index(s, char_idx);
    Some(s.remove(byte_idx))
}

pub(crate) fn char_at(s: &str, char_idx: usize) -> Option<char> {
    s.chars().nth(char_idx)
}
