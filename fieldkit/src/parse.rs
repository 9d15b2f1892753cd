//! Splitting raw number input into integer and decimal parts.

use crate::config::NumberFieldConfig;

/// Read-only snapshot of a raw number string.
///
/// Recomputed from scratch on every edit; nothing here is stored by the field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedValue {
    /// Input exactly as received.
    pub original: String,
    /// Input with thousands separators removed.
    pub string_value: String,
    /// Everything before the first decimal separator, sign included.
    pub integer_part: String,
    /// Everything after the first decimal separator.
    pub decimal_part: String,
    pub contains_decimal: bool,
    /// Chars in the integer part, not counting a leading `-`.
    pub integer_length: usize,
    /// Chars in the decimal part.
    pub decimal_length: usize,
}

impl ParsedValue {
    /// Char index of the decimal separator within `string_value`.
    pub fn separator_index(&self) -> Option<usize> {
        self.contains_decimal
            .then(|| self.integer_part.chars().count())
    }

    /// Whether a char offset into `string_value` lies after the separator.
    pub fn in_decimal_part(&self, offset: usize) -> bool {
        self.separator_index().is_some_and(|idx| offset > idx)
    }

    /// Whether the value holds the decimal separator more than once.
    pub fn has_extra_separator(&self, decimal_separator: char) -> bool {
        self.decimal_part.contains(decimal_separator)
    }

    /// Whether the value reads as a number: optional sign, digits, and at
    /// most one separator. Empty input and a lone separator are accepted
    /// since they are natural intermediate states while typing.
    pub fn is_well_formed(&self, decimal_separator: char) -> bool {
        let unsigned = self
            .integer_part
            .strip_prefix('-')
            .unwrap_or(&self.integer_part);
        unsigned.chars().all(|c| c.is_ascii_digit())
            && self.decimal_part.chars().all(|c| c.is_ascii_digit())
            && !self.has_extra_separator(decimal_separator)
    }
}

/// Split `raw` once on the configured decimal separator.
pub fn parse(raw: &str, config: &NumberFieldConfig) -> ParsedValue {
    let string_value: String = match config.thousands_separator {
        Some(separator) => raw.chars().filter(|c| *c != separator).collect(),
        None => raw.to_string(),
    };

    let (integer_part, decimal_part, contains_decimal) =
        match string_value.split_once(config.decimal_separator) {
            Some((integer, decimal)) => (integer.to_string(), decimal.to_string(), true),
            None => (string_value.clone(), String::new(), false),
        };

    let integer_length = integer_part
        .strip_prefix('-')
        .unwrap_or(&integer_part)
        .chars()
        .count();
    let decimal_length = decimal_part.chars().count();

    ParsedValue {
        original: raw.to_string(),
        string_value,
        integer_part,
        decimal_part,
        contains_decimal,
        integer_length,
        decimal_length,
    }
}
