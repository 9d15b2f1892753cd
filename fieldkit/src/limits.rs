//! Digit limit checks applied to every number edit.

use crate::config::NumberFieldConfig;
use crate::error::RejectReason;
use crate::parse::ParsedValue;

/// A single edit as seen by the limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edit {
    /// Char offset into the unformatted candidate where the edit happened.
    pub position: usize,
    /// The keystroke was the decimal separator itself.
    pub is_decimal_separator: bool,
}

impl Edit {
    pub fn at(position: usize) -> Self {
        Self {
            position,
            is_decimal_separator: false,
        }
    }

    pub fn separator_at(position: usize) -> Self {
        Self {
            position,
            is_decimal_separator: true,
        }
    }
}

/// Decide whether the candidate produced by `edit` may be committed.
///
/// Only the part the caret is in is checked, so a value that was already
/// over a limit (set from outside) can still be edited in the other part.
pub fn check_edit(
    parsed: &ParsedValue,
    edit: Edit,
    config: &NumberFieldConfig,
) -> Result<(), RejectReason> {
    if parsed.has_extra_separator(config.decimal_separator) {
        return Err(RejectReason::DuplicateSeparator(config.decimal_separator));
    }

    // The separator keystroke moves the digits after it into the decimal part.
    if parsed.in_decimal_part(edit.position) || edit.is_decimal_separator {
        if parsed.decimal_length > config.decimal_limit {
            return Err(RejectReason::DecimalLimit {
                length: parsed.decimal_length,
                limit: config.decimal_limit,
            });
        }
    } else if parsed.integer_length > config.integer_limit {
        return Err(RejectReason::IntegerLimit {
            length: parsed.integer_length,
            limit: config.integer_limit,
        });
    }

    Ok(())
}
