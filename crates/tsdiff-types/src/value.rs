//! Cell values and the field-equality rule.
//!
//! Every field is classified once, when parsed: an empty lexeme is
//! [`CellValue::Missing`], a lexeme that parses as a finite number is a
//! [`CellValue::Number`], anything else is [`CellValue::Text`]. Equality
//! follows the classification: numbers compare numerically (`5` equals
//! `5.0`, and integers wider than `f64` precision stay distinct), text
//! compares exactly, two missing values are equal, and missing versus
//! present is always a difference.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One table cell in its native representation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum CellValue {
    /// An absent or empty field.
    Missing,
    /// A field whose lexeme parses as a finite number.
    Number {
        /// The lexeme as it appeared in the source, kept for display.
        raw: String,
        /// The parsed value used for equality.
        value: f64,
    },
    /// Any other field content.
    Text(String),
}

impl CellValue {
    /// Classify a raw field lexeme.
    ///
    /// Non-finite parses (`NaN`, `inf`) stay text so that equality remains
    /// reflexive.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Missing;
        }
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Number {
                raw: raw.to_string(),
                value,
            },
            _ => Self::Text(raw.to_string()),
        }
    }

    /// Returns `true` if the cell is an absent or empty field.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Missing, Self::Missing) => true,
            (
                Self::Number { raw: raw_a, value: a },
                Self::Number { raw: raw_b, value: b },
            ) => {
                // Two integer lexemes compare as integers; `f64` alone
                // cannot tell neighbours apart above 2^53.
                match (raw_a.parse::<i128>(), raw_b.parse::<i128>()) {
                    (Ok(int_a), Ok(int_b)) => int_a == int_b,
                    _ => a == b,
                }
            }
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => false,
        }
    }
}

/// Reproduces the source lexeme; `Missing` displays as the empty string.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => Ok(()),
            Self::Number { raw, .. } => f.write_str(raw),
            Self::Text(text) => f.write_str(text),
        }
    }
}
