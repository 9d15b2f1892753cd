//! Error types for field configuration and refused edits.

use thiserror::Error;

/// Errors that can occur when validating a field configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Decimal and thousands separators must differ.
    #[error("decimal separator '{0}' is also used as thousands separator")]
    SeparatorCollision(char),

    /// Separators cannot be characters that belong to the number itself.
    #[error("'{0}' cannot be used as a separator")]
    InvalidSeparator(char),

    /// The mask name is neither a preset nor a usable pattern.
    #[error("unknown mask '{0}'")]
    UnknownMask(String),
}

impl ConfigError {
    /// Creates an unknown mask error.
    pub fn unknown_mask(mask: impl Into<String>) -> Self {
        Self::UnknownMask(mask.into())
    }
}

/// Why the limit check refused an edit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// The integer part would hold more digits than allowed.
    #[error("integer part has {length} digits, limit is {limit}")]
    IntegerLimit { length: usize, limit: usize },

    /// The decimal part would hold more digits than allowed.
    #[error("decimal part has {length} digits, limit is {limit}")]
    DecimalLimit { length: usize, limit: usize },

    /// The value would contain the decimal separator twice.
    #[error("value already contains decimal separator '{0}'")]
    DuplicateSeparator(char),
}
