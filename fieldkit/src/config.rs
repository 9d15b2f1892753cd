//! Field configuration types.
//!
//! Configurations are built with chainable setters and are immutable once a
//! field has been created from them. They also deserialize from camelCase
//! keys, every option defaulted, so fields can be declared in data:
//!
//! ```ignore
//! let config: NumberFieldConfig = serde_json::from_str(
//!     r#"{ "decimalSeparator": ",", "thousandsSeparator": ".", "integerLimit": 6 }"#,
//! )?;
//! config.validate()?;
//! ```

use serde::Deserialize;

use crate::error::ConfigError;
use crate::mask::PatternMask;

/// Color applied to fields that don't set one.
pub const DEFAULT_COLOR: &str = "primary";

/// Counter maximum when the counter is enabled without a number.
pub const DEFAULT_COUNTER: usize = 25;

/// Options shared by every field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldOptions {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub color: Option<String>,
    pub disabled: bool,
    pub readonly: bool,
    pub required: bool,
    pub autofocus: bool,
    pub clearable: bool,
    /// Run validation rules on blur only instead of on every change.
    pub validate_on_blur: bool,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            label: None,
            placeholder: None,
            prefix: None,
            suffix: None,
            color: Some(DEFAULT_COLOR.to_string()),
            disabled: false,
            readonly: false,
            required: false,
            autofocus: false,
            clearable: false,
            validate_on_blur: false,
        }
    }
}

/// Chainable setters for the shared options, implemented for each config.
macro_rules! field_option_setters {
    ($ty:ty) => {
        impl $ty {
            /// Set the label.
            pub fn label(mut self, label: impl Into<String>) -> Self {
                self.field.label = Some(label.into());
                self
            }

            /// Set the placeholder shown while the field is empty.
            pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
                self.field.placeholder = Some(placeholder.into());
                self
            }

            /// Set a fixed prefix rendered before the value.
            pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
                self.field.prefix = Some(prefix.into());
                self
            }

            /// Set a fixed suffix rendered after the value.
            pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
                self.field.suffix = Some(suffix.into());
                self
            }

            /// Set the theme color name (`None` removes color classes).
            pub fn color(mut self, color: Option<&str>) -> Self {
                self.field.color = color.map(str::to_string);
                self
            }

            pub fn disabled(mut self) -> Self {
                self.field.disabled = true;
                self
            }

            pub fn readonly(mut self) -> Self {
                self.field.readonly = true;
                self
            }

            pub fn required(mut self) -> Self {
                self.field.required = true;
                self
            }

            pub fn autofocus(mut self) -> Self {
                self.field.autofocus = true;
                self
            }

            pub fn clearable(mut self) -> Self {
                self.field.clearable = true;
                self
            }

            /// Defer validation until the field loses focus.
            pub fn validate_on_blur(mut self) -> Self {
                self.field.validate_on_blur = true;
                self
            }
        }
    };
}

// =============================================================================
// Number Field
// =============================================================================

/// Configuration of a [`NumberField`](crate::NumberField).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumberFieldConfig {
    #[serde(flatten)]
    pub field: FieldOptions,
    pub decimal_separator: char,
    /// Grouping character inserted every three integer digits.
    pub thousands_separator: Option<char>,
    /// Maximum digits before the decimal separator.
    pub integer_limit: usize,
    /// Maximum digits after the decimal separator.
    pub decimal_limit: usize,
    #[serde(rename = "box")]
    pub boxed: bool,
    pub full_width: bool,
}

impl Default for NumberFieldConfig {
    fn default() -> Self {
        Self {
            field: FieldOptions::default(),
            decimal_separator: '.',
            thousands_separator: Some(','),
            integer_limit: 12,
            decimal_limit: 2,
            boxed: false,
            full_width: false,
        }
    }
}

impl NumberFieldConfig {
    /// Create a config with the default separators and limits.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Set the grouping separator (`None` disables grouping).
    pub fn thousands_separator(mut self, separator: Option<char>) -> Self {
        self.thousands_separator = separator;
        self
    }

    pub fn integer_limit(mut self, limit: usize) -> Self {
        self.integer_limit = limit;
        self
    }

    pub fn decimal_limit(mut self, limit: usize) -> Self {
        self.decimal_limit = limit;
        self
    }

    pub fn boxed(mut self) -> Self {
        self.boxed = true;
        self
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// Check the separators can be told apart from each other and from digits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let separators = std::iter::once(self.decimal_separator).chain(self.thousands_separator);
        for separator in separators {
            if separator.is_ascii_digit() || separator == '-' {
                return Err(ConfigError::InvalidSeparator(separator));
            }
        }
        if self.thousands_separator == Some(self.decimal_separator) {
            return Err(ConfigError::SeparatorCollision(self.decimal_separator));
        }
        Ok(())
    }
}

field_option_setters!(NumberFieldConfig);

// =============================================================================
// Text Field
// =============================================================================

/// Input type of a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    #[default]
    Text,
    Password,
    Email,
    Number,
    Search,
    Tel,
    Url,
    Color,
    File,
    Time,
    Date,
    DatetimeLocal,
    Week,
    Month,
}

impl FieldType {
    /// Types that always render as holding content, even when empty.
    pub fn is_always_dirty(&self) -> bool {
        matches!(
            self,
            FieldType::Color
                | FieldType::File
                | FieldType::Time
                | FieldType::Date
                | FieldType::DatetimeLocal
                | FieldType::Week
                | FieldType::Month
        )
    }
}

/// Configuration of a [`TextField`](crate::TextField).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextFieldConfig {
    #[serde(flatten)]
    pub field: FieldOptions,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Pattern mask or preset name.
    pub mask: Option<String>,
    /// Report the masked text instead of the unmasked value.
    pub return_masked_value: bool,
    /// Stop at the first unfilled token instead of writing out literals.
    pub dont_fill_mask_blanks: bool,
    /// Maximum length shown by the character counter.
    pub counter: Option<usize>,
    pub multi_line: bool,
    pub textarea: bool,
    pub auto_grow: bool,
    pub no_resize: bool,
    /// Minimum height in rows for multi-line fields.
    pub rows: usize,
    pub single_line: bool,
    pub solo: bool,
    pub solo_inverted: bool,
    pub flat: bool,
    #[serde(rename = "box")]
    pub boxed: bool,
    pub full_width: bool,
}

impl Default for TextFieldConfig {
    fn default() -> Self {
        Self {
            field: FieldOptions::default(),
            field_type: FieldType::Text,
            mask: None,
            return_masked_value: false,
            dont_fill_mask_blanks: false,
            counter: None,
            multi_line: false,
            textarea: false,
            auto_grow: false,
            no_resize: false,
            rows: 5,
            single_line: false,
            solo: false,
            solo_inverted: false,
            flat: false,
            boxed: false,
            full_width: false,
        }
    }
}

impl TextFieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field_type(mut self, field_type: FieldType) -> Self {
        self.field_type = field_type;
        self
    }

    /// Set a pattern mask (`"##/##/####"`) or preset name (`"date"`).
    pub fn mask(mut self, mask: impl Into<String>) -> Self {
        self.mask = Some(mask.into());
        self
    }

    pub fn return_masked_value(mut self) -> Self {
        self.return_masked_value = true;
        self
    }

    pub fn dont_fill_mask_blanks(mut self) -> Self {
        self.dont_fill_mask_blanks = true;
        self
    }

    /// Enable the counter with the given maximum.
    pub fn counter(mut self, max: usize) -> Self {
        self.counter = Some(max);
        self
    }

    /// Enable the counter with the default maximum.
    pub fn default_counter(self) -> Self {
        self.counter(DEFAULT_COUNTER)
    }

    pub fn textarea(mut self) -> Self {
        self.textarea = true;
        self
    }

    pub fn multi_line(mut self) -> Self {
        self.multi_line = true;
        self
    }

    pub fn auto_grow(mut self) -> Self {
        self.auto_grow = true;
        self
    }

    pub fn no_resize(mut self) -> Self {
        self.no_resize = true;
        self
    }

    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn single_line(mut self) -> Self {
        self.single_line = true;
        self
    }

    pub fn solo(mut self) -> Self {
        self.solo = true;
        self
    }

    pub fn solo_inverted(mut self) -> Self {
        self.solo_inverted = true;
        self
    }

    pub fn flat(mut self) -> Self {
        self.flat = true;
        self
    }

    pub fn boxed(mut self) -> Self {
        self.boxed = true;
        self
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    pub fn is_textarea(&self) -> bool {
        self.multi_line || self.textarea
    }

    /// Resolve the configured mask, if any.
    pub fn pattern_mask(&self) -> Result<Option<PatternMask>, ConfigError> {
        self.mask
            .as_deref()
            .map(|mask| PatternMask::parse(mask, self.dont_fill_mask_blanks))
            .transpose()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pattern_mask().map(|_| ())
    }
}

field_option_setters!(TextFieldConfig);
