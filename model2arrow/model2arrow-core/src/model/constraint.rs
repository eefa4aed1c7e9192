use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

use super::LiteralValue;

/// Validation metadata attached to a field or an annotated type.
///
/// Only lower bounds and decimal digits influence the derived column type;
/// the remaining variants are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    /// Exclusive lower bound.
    Gt(LiteralValue),
    /// Inclusive lower bound.
    Ge(LiteralValue),
    Lt(LiteralValue),
    Le(LiteralValue),
    MultipleOf(LiteralValue),
    MinLength(usize),
    MaxLength(usize),
    /// Decimal precision (`max_digits`) and scale (`decimal_places`).
    Digits {
        #[serde(default)]
        max_digits: Option<u8>,
        #[serde(default)]
        decimal_places: Option<i8>,
    },
    /// Any other metadata object, kept by name only.
    Other(String),
}

impl Constraint {
    pub fn digits(max_digits: u8, decimal_places: i8) -> Self {
        Constraint::Digits {
            max_digits: Some(max_digits),
            decimal_places: Some(decimal_places),
        }
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Constraint::Gt(v) => write!(f, "gt={v}"),
            Constraint::Ge(v) => write!(f, "ge={v}"),
            Constraint::Lt(v) => write!(f, "lt={v}"),
            Constraint::Le(v) => write!(f, "le={v}"),
            Constraint::MultipleOf(v) => write!(f, "multiple_of={v}"),
            Constraint::MinLength(n) => write!(f, "min_length={n}"),
            Constraint::MaxLength(n) => write!(f, "max_length={n}"),
            Constraint::Digits {
                max_digits,
                decimal_places,
            } => {
                let digits = max_digits.map_or("none".to_string(), |d| d.to_string());
                let places = decimal_places.map_or("none".to_string(), |d| d.to_string());
                write!(f, "max_digits={digits}, decimal_places={places}")
            }
            Constraint::Other(name) => f.write_str(name),
        }
    }
}
