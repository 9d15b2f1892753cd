//! Validation rules and the `Validatable` capability.
//!
//! # Example
//!
//! ```ignore
//! let rules = Rules::new()
//!     .required("Amount is required")
//!     .rule(|v| v != "0", "Amount cannot be zero");
//!
//! let mut field = NumberField::new(config, store)?.with_rules(rules);
//! ```

/// Type alias for rule closures.
type Rule = Box<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

/// Where a renderer places a field's error message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorDisplay {
    /// On the row under the input.
    #[default]
    Below,
    /// After the suffix, on the input row.
    Inline,
    /// Not shown; the field only takes the `error--text` class.
    None,
}

/// Ordered list of rules; the first failing rule's message wins.
#[derive(Default)]
pub struct Rules {
    rules: Vec<Rule>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a custom rule.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let msg = msg.into();
        self.rules
            .push(Box::new(move |v| if f(v) { Ok(()) } else { Err(msg.clone()) }));
        self
    }

    /// Value must not be empty or whitespace.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.trim().is_empty(), msg)
    }

    /// Value must hold at least `min` chars (empty values pass).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.is_empty() || v.chars().count() >= min, msg)
    }

    /// Value must hold at most `max` chars.
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() <= max, msg)
    }

    /// Run all rules against `value`.
    pub fn check(&self, value: &str) -> Result<(), String> {
        self.rules.iter().try_for_each(|rule| rule(value))
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

impl std::fmt::Debug for Rules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rules")
            .field("count", &self.rules.len())
            .finish()
    }
}

/// Trait for widgets that can be validated.
///
/// Implementors provide the value and error storage; `validate` is shared.
pub trait Validatable {
    /// Extract the current value for validation.
    fn validation_value(&self) -> String;

    /// Rules applied by `validate`.
    fn rules(&self) -> &Rules;

    /// Get the current validation error message (if any).
    fn error(&self) -> Option<&str>;

    /// Set or clear the validation error.
    fn set_error(&mut self, msg: Option<String>);

    /// Get the error display mode.
    fn error_display(&self) -> ErrorDisplay;

    /// Check if the widget has a validation error.
    fn has_error(&self) -> bool {
        self.error().is_some()
    }

    /// Run the rules and store the outcome. Returns true when valid.
    fn validate(&mut self) -> bool {
        let outcome = self.rules().check(&self.validation_value());
        let valid = outcome.is_ok();
        self.set_error(outcome.err());
        valid
    }
}
