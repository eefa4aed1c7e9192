use std::{collections::HashMap, sync::Arc};

use arrow::datatypes::{DataType, Field, Fields, Schema, TimeUnit as ArrowTimeUnit};
use model2arrow_core::{ColumnType, ElementDef, SchemaField, TimeUnit};

use crate::{EXTENSION_NAME_KEY, UUID_BYTE_WIDTH, UUID_EXTENSION_NAME};

// ---------------------------------------------------------------------------
// Convert column schema IR to Arrow schema
// ---------------------------------------------------------------------------

/// Converts a `model2arrow-core` schema into an Arrow `Schema`.
pub fn schema_to_arrow_schema(schema: &model2arrow_core::Schema) -> Schema {
    Schema::new(schema_fields_to_arrow(schema))
}

/// Converts a single column type into an Arrow `DataType`.
///
/// Field-level metadata (the UUID extension name) is only attached by
/// [`schema_to_arrow_schema`], where a field exists to carry it.
pub fn column_type_to_arrow(column_type: &ColumnType) -> DataType {
    match column_type {
        ColumnType::String => DataType::Utf8,
        ColumnType::Bool => DataType::Boolean,
        ColumnType::Int32 => DataType::Int32,
        ColumnType::Int64 => DataType::Int64,
        ColumnType::UInt64 => DataType::UInt64,
        ColumnType::Float64 => DataType::Float64,
        ColumnType::Binary => DataType::Binary,
        ColumnType::Date32 => DataType::Date32,
        ColumnType::Timestamp { unit, timezone } => {
            DataType::Timestamp(time_unit_to_arrow(*unit), timezone.as_deref().map(Arc::from))
        }
        ColumnType::Time64(unit) => DataType::Time64(time_unit_to_arrow(*unit)),
        ColumnType::Decimal128 { precision, scale } => DataType::Decimal128(*precision, *scale),
        ColumnType::Dictionary { index, value } => DataType::Dictionary(
            Box::new(column_type_to_arrow(index)),
            Box::new(column_type_to_arrow(value)),
        ),
        ColumnType::List(item) => DataType::List(Arc::new(element_field("item", item))),
        ColumnType::Map { key, value } => {
            let key_field = element_field("key", key);
            let val_field = element_field("value", value);
            let entry_struct = DataType::Struct(vec![key_field, val_field].into());
            let entry_field = Field::new("entries", entry_struct, false);
            DataType::Map(Arc::new(entry_field), false)
        }
        ColumnType::Struct(fields) => {
            DataType::Struct(Fields::from(schema_fields_to_arrow(fields)))
        }
        ColumnType::Uuid => DataType::FixedSizeBinary(UUID_BYTE_WIDTH),
    }
}

fn schema_fields_to_arrow(fields: &[SchemaField]) -> Vec<Field> {
    fields
        .iter()
        .map(|f| named_field(&f.name, &f.column_type, f.nullable))
        .collect()
}

fn element_field(name: &str, elem: &ElementDef) -> Field {
    named_field(name, &elem.column_type, elem.nullable)
}

fn named_field(name: &str, column_type: &ColumnType, nullable: bool) -> Field {
    let field = Field::new(name, column_type_to_arrow(column_type), nullable);
    match column_type {
        ColumnType::Uuid => field.with_metadata(HashMap::from([(
            EXTENSION_NAME_KEY.to_string(),
            UUID_EXTENSION_NAME.to_string(),
        )])),
        _ => field,
    }
}

fn time_unit_to_arrow(unit: TimeUnit) -> ArrowTimeUnit {
    match unit {
        TimeUnit::Second => ArrowTimeUnit::Second,
        TimeUnit::Millisecond => ArrowTimeUnit::Millisecond,
        TimeUnit::Microsecond => ArrowTimeUnit::Microsecond,
        TimeUnit::Nanosecond => ArrowTimeUnit::Nanosecond,
    }
}
