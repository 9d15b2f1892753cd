//! Backend-agnostic render model of a field.

use unicode_width::UnicodeWidthStr;

use crate::style::ClassList;
use crate::validation::ErrorDisplay;

/// Attributes a renderer forwards to its native input, if it has one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldAttrs {
    pub disabled: bool,
    pub readonly: bool,
    pub required: bool,
    pub autofocus: bool,
    /// Maximum text length in chars (masked fields).
    pub max_length: Option<usize>,
}

/// Everything needed to draw a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldView {
    pub label: Option<String>,
    pub prefix: Option<String>,
    /// Displayed text, or the placeholder when empty.
    pub text: String,
    pub showing_placeholder: bool,
    pub suffix: Option<String>,
    /// Caret as (row, column) in terminal cells, prefix included.
    /// `None` while unfocused.
    pub caret: Option<(usize, usize)>,
    pub classes: ClassList,
    pub attrs: FieldAttrs,
    /// Counter text such as `"12 / 25"`.
    pub counter: Option<String>,
    pub error: Option<String>,
    pub error_display: ErrorDisplay,
    /// A clear button should be shown.
    pub clear_icon: bool,
    /// Height in rows.
    pub height: usize,
}

impl FieldView {
    /// Rows of the input area with prefix and suffix attached.
    pub fn lines(&self) -> Vec<String> {
        let prefix = self.prefix.as_deref().unwrap_or("");
        let suffix = self.suffix.as_deref().unwrap_or("");
        let mut lines: Vec<String> = self.text.split('\n').map(str::to_string).collect();
        if let Some(first) = lines.first_mut() {
            first.insert_str(0, prefix);
        }
        if let Some(last) = lines.last_mut() {
            last.push_str(suffix);
        }
        lines
    }

    /// Width of the widest row, in cells.
    pub fn width(&self) -> usize {
        self.lines()
            .iter()
            .map(|line| line.width())
            .max()
            .unwrap_or(0)
    }
}

/// Caret location in cells for char offset `caret` of `text`.
pub(crate) fn caret_cell(text: &str, caret: usize, prefix: Option<&str>) -> (usize, usize) {
    let before: String = text.chars().take(caret).collect();
    let row = before.matches('\n').count();
    let line = before.rsplit('\n').next().unwrap_or("");
    let mut column = line.width();
    if row == 0 {
        column += prefix.map_or(0, |p| p.width());
    }
    (row, column)
}
