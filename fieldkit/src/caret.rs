//! Caret restoration across reformatting.
//!
//! A reformat inserts or drops delimiters, so a raw caret offset means
//! nothing afterwards. The tracker instead remembers how many significant
//! (non-delimiter) characters sit before the caret and finds the same spot
//! in the new text.

use crate::mask::Maskable;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaretTracker {
    selection_count: usize,
}

impl CaretTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Significant characters recorded before the caret.
    pub fn selection_count(&self) -> usize {
        self.selection_count
    }

    /// Record the caret directly as a count of significant characters.
    pub fn set_selection_count(&mut self, count: usize) {
        self.selection_count = count;
    }

    /// Record the caret at char offset `caret` of `text`.
    pub fn reset(&mut self, text: &str, caret: usize, mask: &impl Maskable) {
        self.selection_count = significant_before(text, caret, mask);
    }

    /// Caret offset in `formatted` matching the recorded count.
    pub fn restore(&self, formatted: &str, mask: &impl Maskable) -> usize {
        let mut remaining = self.selection_count;
        let mut caret = 0;
        for c in formatted.chars() {
            if remaining == 0 {
                break;
            }
            if !mask.is_delimiter(c) {
                remaining -= 1;
            }
            caret += 1;
        }
        caret
    }
}

/// Count the non-delimiter chars in the first `caret` chars of `text`.
pub fn significant_before(text: &str, caret: usize, mask: &impl Maskable) -> usize {
    text.chars()
        .take(caret)
        .filter(|c| !mask.is_delimiter(*c))
        .count()
}
