//! Resolvers for container and value-set types.

use super::{Resolver, normalize};
use crate::{
    error::SchemaCreationError,
    model::{Constraint, EnumDef, LiteralValue, TypeAnnotation},
    schema::{ColumnType, ElementDef},
};

/// List items are always nullable in the column type, so an optional
/// element type only loses its null arm.
pub(super) fn list_type(
    resolver: &Resolver<'_>,
    elem: &TypeAnnotation,
    metadata: &[Constraint],
    depth: usize,
) -> Result<ColumnType, SchemaCreationError> {
    let elem = normalize(elem);
    let item = resolver.resolve_type(&elem.annotation, metadata, depth + 1)?;
    Ok(ColumnType::List(Box::new(ElementDef::new(item, true))))
}

/// Keys are never null; values always may be.
pub(super) fn map_type(
    resolver: &Resolver<'_>,
    key: &TypeAnnotation,
    value: &TypeAnnotation,
    metadata: &[Constraint],
    depth: usize,
) -> Result<ColumnType, SchemaCreationError> {
    let key = normalize(key);
    let value = normalize(value);
    let key_type = resolver.resolve_type(&key.annotation, metadata, depth + 1)?;
    let value_type = resolver.resolve_type(&value.annotation, metadata, depth + 1)?;
    Ok(ColumnType::Map {
        key: Box::new(ElementDef::new(key_type, false)),
        value: Box::new(ElementDef::new(value_type, true)),
    })
}

pub(super) fn enum_type(def: &EnumDef) -> Result<ColumnType, SchemaCreationError> {
    value_set_type(&def.values)
}

pub(super) fn literal_type(values: &[LiteralValue]) -> Result<ColumnType, SchemaCreationError> {
    value_set_type(values)
}

/// All-string sets become a string dictionary, all-integer sets plain `Int64`.
/// Booleans count as integers. An empty set is all-string.
///
/// The dictionary keeps 32-bit indices even though a storage layer may pick
/// narrower ones when writing.
fn value_set_type(values: &[LiteralValue]) -> Result<ColumnType, SchemaCreationError> {
    if values.iter().all(|v| matches!(v, LiteralValue::Str(_))) {
        return Ok(ColumnType::string_dictionary());
    }
    if values.iter().all(|v| v.as_int().is_some()) {
        return Ok(ColumnType::Int64);
    }

    Err(SchemaCreationError::InvalidLiteralMixedTypes {
        values: values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    })
}
