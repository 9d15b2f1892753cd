//! Masks: turning stored values into display text and back.

use crate::error::ConfigError;

/// Capability of formatting a value for display.
///
/// `unmask_text(mask_text(v))` recovers `v` for any value the mask accepts.
/// Delimiters are the characters a mask inserts; the caret tracker skips them
/// when counting significant characters.
pub trait Maskable {
    fn mask_text(&self, text: &str) -> String;
    fn unmask_text(&self, text: &str) -> String;
    fn is_delimiter(&self, c: char) -> bool;
}

// =============================================================================
// Pattern Mask
// =============================================================================

const DELIMITERS: &str = "-!$%^&*()_+|~=`{}[]:\";'<>?,./\\ ";

const PRESETS: &[(&str, &str)] = &[
    ("credit-card", "#### - #### - #### - ####"),
    ("date", "##/##/####"),
    ("date-with-time", "##/##/#### ##:##"),
    ("phone", "(###) ### - ####"),
    ("social", "###-##-####"),
    ("time", "##:##"),
    ("time-with-seconds", "##:##:##"),
];

/// Whether `c` is one of the characters pattern masks treat as literals.
pub fn is_mask_delimiter(c: char) -> bool {
    DELIMITERS.contains(c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Digit,
    UpperAlpha,
    LowerAlpha,
    UpperAlnum,
    LowerAlnum,
    Delimiter,
}

impl Token {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Token::Digit),
            'A' => Some(Token::UpperAlpha),
            'a' => Some(Token::LowerAlpha),
            'N' => Some(Token::UpperAlnum),
            'n' => Some(Token::LowerAlnum),
            'X' => Some(Token::Delimiter),
            _ => None,
        }
    }

    /// Convert `c` if it is accepted by this token.
    fn accept(&self, c: char) -> Option<char> {
        match self {
            Token::Digit => c.is_ascii_digit().then_some(c),
            Token::UpperAlpha => c.is_ascii_alphabetic().then(|| c.to_ascii_uppercase()),
            Token::LowerAlpha => c.is_ascii_alphabetic().then(|| c.to_ascii_lowercase()),
            Token::UpperAlnum => c.is_ascii_alphanumeric().then(|| c.to_ascii_uppercase()),
            Token::LowerAlnum => c.is_ascii_alphanumeric().then(|| c.to_ascii_lowercase()),
            Token::Delimiter => is_mask_delimiter(c).then_some(c),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Token(Token),
    Literal(char),
}

/// A fixed-shape mask such as `"##/##/####"`.
///
/// Tokens: `#` digit, `A`/`a` letter (upper/lower-cased), `N`/`n`
/// alphanumeric (upper/lower-cased), `X` delimiter. Anything else is a
/// literal written out as the user types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMask {
    source: String,
    slots: Vec<Slot>,
    dont_fill_blanks: bool,
}

impl PatternMask {
    /// Parse a preset name or a pattern.
    pub fn parse(mask: &str, dont_fill_blanks: bool) -> Result<Self, ConfigError> {
        let pattern = PRESETS
            .iter()
            .find(|(name, _)| *name == mask)
            .map(|(_, pattern)| *pattern)
            .unwrap_or(mask);

        let slots: Vec<Slot> = pattern
            .chars()
            .map(|c| Token::from_char(c).map_or(Slot::Literal(c), Slot::Token))
            .collect();

        if !slots.iter().any(|slot| matches!(slot, Slot::Token(_))) {
            return Err(ConfigError::unknown_mask(mask));
        }

        Ok(Self {
            source: pattern.to_string(),
            slots,
            dont_fill_blanks,
        })
    }

    /// The expanded pattern.
    pub fn pattern(&self) -> &str {
        &self.source
    }

    /// Length of a completely filled value, in chars.
    pub fn max_len(&self) -> usize {
        self.slots.len()
    }
}

impl Maskable for PatternMask {
    fn mask_text(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut chars = text.chars().peekable();
        let mut masked = String::with_capacity(self.slots.len());

        for slot in &self.slots {
            let next = chars.peek().copied();
            match slot {
                Slot::Literal(literal) if next == Some(*literal) => {
                    masked.push(*literal);
                    chars.next();
                }
                Slot::Literal(literal) if !self.dont_fill_blanks => masked.push(*literal),
                Slot::Literal(_) => break,
                Slot::Token(token) => match next.and_then(|c| token.accept(c)) {
                    Some(converted) => {
                        masked.push(converted);
                        chars.next();
                    }
                    None => break,
                },
            }
        }

        masked
    }

    fn unmask_text(&self, text: &str) -> String {
        text.chars().filter(|c| !is_mask_delimiter(*c)).collect()
    }

    fn is_delimiter(&self, c: char) -> bool {
        is_mask_delimiter(c)
    }
}

// =============================================================================
// Number Mask
// =============================================================================

/// Groups the integer digits of a number with a thousands separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberMask {
    decimal_separator: char,
    thousands_separator: Option<char>,
}

impl NumberMask {
    pub fn new(decimal_separator: char, thousands_separator: Option<char>) -> Self {
        Self {
            decimal_separator,
            thousands_separator,
        }
    }
}

impl Maskable for NumberMask {
    fn mask_text(&self, text: &str) -> String {
        let plain = self.unmask_text(text);
        let Some(separator) = self.thousands_separator else {
            return plain;
        };

        let (sign, unsigned) = match plain.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", plain.as_str()),
        };
        let (integer, rest) = match unsigned.find(self.decimal_separator) {
            Some(idx) => unsigned.split_at(idx),
            None => (unsigned, ""),
        };

        let digits: Vec<char> = integer.chars().collect();
        let mut masked = String::with_capacity(plain.len() + digits.len() / 3);
        masked.push_str(sign);
        for (i, c) in digits.iter().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                masked.push(separator);
            }
            masked.push(*c);
        }
        masked.push_str(rest);
        masked
    }

    fn unmask_text(&self, text: &str) -> String {
        match self.thousands_separator {
            Some(separator) => text.chars().filter(|c| *c != separator).collect(),
            None => text.to_string(),
        }
    }

    fn is_delimiter(&self, c: char) -> bool {
        self.thousands_separator == Some(c)
    }
}
