//! Refine a base type from the metadata attached to it.

use crate::{
    error::SchemaCreationError,
    model::{Constraint, LiteralValue},
    schema::ColumnType,
};

/// Largest precision a 128-bit decimal column holds.
pub const MAX_DECIMAL128_PRECISION: u8 = 38;

/// Integers with a non-negative lower bound become unsigned.
///
/// The last `gt`/`ge` in `metadata` wins. A bound of `gt=-1` keeps the column
/// signed even though it admits the same values as `ge=0`.
pub fn int_type(metadata: &[Constraint]) -> Result<ColumnType, SchemaCreationError> {
    let mut min_value: Option<i64> = None;
    for constraint in metadata {
        match constraint {
            Constraint::Gt(value) => min_value = Some(int_bound("gt", value)?),
            Constraint::Ge(value) => min_value = Some(int_bound("ge", value)?),
            _ => {}
        }
    }

    match min_value {
        Some(min) if min >= 0 => Ok(ColumnType::UInt64),
        _ => Ok(ColumnType::Int64),
    }
}

fn int_bound(constraint: &'static str, value: &LiteralValue) -> Result<i64, SchemaCreationError> {
    value
        .as_int()
        .ok_or_else(|| SchemaCreationError::InvalidConstraintType {
            constraint,
            value: value.to_string(),
        })
}

/// Decimals take precision and scale from the last complete `Digits` entry.
pub fn decimal_type(metadata: &[Constraint]) -> Result<ColumnType, SchemaCreationError> {
    let digits = metadata.iter().rev().find_map(|constraint| match constraint {
        Constraint::Digits {
            max_digits: Some(precision),
            decimal_places: Some(scale),
        } => Some((*precision, *scale)),
        _ => None,
    });
    let Some((precision, scale)) = digits else {
        return Err(SchemaCreationError::MissingDecimalMetadata);
    };

    if precision == 0
        || precision > MAX_DECIMAL128_PRECISION
        || scale < 0
        || scale as u8 > precision
    {
        return Err(SchemaCreationError::InvalidDecimalPrecision {
            precision,
            scale,
            max: MAX_DECIMAL128_PRECISION,
        });
    }

    Ok(ColumnType::Decimal128 { precision, scale })
}
