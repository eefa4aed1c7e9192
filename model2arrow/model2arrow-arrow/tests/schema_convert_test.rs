use arrow::datatypes::{DataType, TimeUnit};
use model2arrow_arrow::{
    EXTENSION_NAME_KEY, UUID_EXTENSION_NAME, column_type_to_arrow, schema_to_arrow_schema,
};
use model2arrow_core::{ColumnType, ElementDef, Schema, SchemaField, TimeUnit as CoreTimeUnit};

#[test]
fn schema_to_arrow_schema_converts_all_column_types() {
    let schema = Schema::new(vec![
        SchemaField::new("s", ColumnType::String, false),
        SchemaField::new("b", ColumnType::Bool, false),
        SchemaField::new("i64", ColumnType::Int64, false),
        SchemaField::new("u64", ColumnType::UInt64, true),
        SchemaField::new("f64", ColumnType::Float64, false),
        SchemaField::new("bin", ColumnType::Binary, false),
        SchemaField::new("date", ColumnType::Date32, false),
        SchemaField::new(
            "ts",
            ColumnType::Timestamp {
                unit: CoreTimeUnit::Millisecond,
                timezone: None,
            },
            false,
        ),
        SchemaField::new("time", ColumnType::Time64(CoreTimeUnit::Microsecond), false),
        SchemaField::new(
            "dec",
            ColumnType::Decimal128 {
                precision: 5,
                scale: 2,
            },
            true,
        ),
        SchemaField::new("kind", ColumnType::string_dictionary(), false),
        SchemaField::new("id", ColumnType::Uuid, false),
    ]);

    let arrow_schema = schema_to_arrow_schema(&schema);

    assert_eq!(arrow_schema.fields().len(), schema.len());
    assert_eq!(arrow_schema.field(0).data_type(), &DataType::Utf8);
    assert_eq!(arrow_schema.field(1).data_type(), &DataType::Boolean);
    assert_eq!(arrow_schema.field(2).data_type(), &DataType::Int64);
    assert_eq!(arrow_schema.field(3).data_type(), &DataType::UInt64);
    assert!(arrow_schema.field(3).is_nullable());
    assert_eq!(arrow_schema.field(4).data_type(), &DataType::Float64);
    assert_eq!(arrow_schema.field(5).data_type(), &DataType::Binary);
    assert_eq!(arrow_schema.field(6).data_type(), &DataType::Date32);
    assert_eq!(
        arrow_schema.field(7).data_type(),
        &DataType::Timestamp(TimeUnit::Millisecond, None)
    );
    assert_eq!(
        arrow_schema.field(8).data_type(),
        &DataType::Time64(TimeUnit::Microsecond)
    );
    assert_eq!(arrow_schema.field(9).data_type(), &DataType::Decimal128(5, 2));
    assert_eq!(
        arrow_schema.field(10).data_type(),
        &DataType::Dictionary(Box::new(DataType::Int32), Box::new(DataType::Utf8))
    );

    let uuid = arrow_schema.field(11);
    assert_eq!(uuid.data_type(), &DataType::FixedSizeBinary(16));
    assert_eq!(
        uuid.metadata().get(EXTENSION_NAME_KEY).map(String::as_str),
        Some(UUID_EXTENSION_NAME)
    );
    assert!(arrow_schema.field(0).metadata().is_empty());
}

#[test]
fn schema_to_arrow_schema_converts_nested_types() {
    let schema = Schema::new(vec![
        SchemaField::new("list", ColumnType::list_of(ColumnType::Int64), false),
        SchemaField::new(
            "map",
            ColumnType::Map {
                key: Box::new(ElementDef::new(ColumnType::String, false)),
                value: Box::new(ElementDef::new(
                    ColumnType::Struct(
                        vec![SchemaField::new("v", ColumnType::Int64, false)].into(),
                    ),
                    true,
                )),
            },
            true,
        ),
        SchemaField::new(
            "st",
            ColumnType::Struct(
                vec![
                    SchemaField::new("c1", ColumnType::Int64, false),
                    SchemaField::new("c2", ColumnType::String, true),
                ]
                .into(),
            ),
            false,
        ),
        SchemaField::new("ids", ColumnType::list_of(ColumnType::Uuid), false),
    ]);

    let arrow_schema = schema_to_arrow_schema(&schema);

    match arrow_schema.field(0).data_type() {
        DataType::List(item) => {
            assert_eq!(item.name(), "item");
            assert_eq!(item.data_type(), &DataType::Int64);
            assert!(item.is_nullable());
        }
        other => panic!("expected list, got {other:?}"),
    }

    match arrow_schema.field(1).data_type() {
        DataType::Map(entry, false) => {
            assert_eq!(entry.name(), "entries");
            assert!(!entry.is_nullable());
            match entry.data_type() {
                DataType::Struct(entries) => {
                    assert_eq!(entries[0].name(), "key");
                    assert_eq!(entries[0].data_type(), &DataType::Utf8);
                    assert!(!entries[0].is_nullable());
                    assert_eq!(entries[1].name(), "value");
                    assert!(entries[1].is_nullable());
                    assert!(matches!(entries[1].data_type(), DataType::Struct(_)));
                }
                other => panic!("expected struct entry, got {other:?}"),
            }
        }
        other => panic!("expected map, got {other:?}"),
    }

    match arrow_schema.field(2).data_type() {
        DataType::Struct(children) => {
            assert_eq!(children.len(), 2);
            assert_eq!(children[0].name(), "c1");
            assert_eq!(children[0].data_type(), &DataType::Int64);
            assert!(!children[0].is_nullable());
            assert_eq!(children[1].name(), "c2");
            assert_eq!(children[1].data_type(), &DataType::Utf8);
            assert!(children[1].is_nullable());
        }
        other => panic!("expected struct, got {other:?}"),
    }

    match arrow_schema.field(3).data_type() {
        DataType::List(item) => {
            assert_eq!(item.data_type(), &DataType::FixedSizeBinary(16));
            assert_eq!(
                item.metadata().get(EXTENSION_NAME_KEY).map(String::as_str),
                Some(UUID_EXTENSION_NAME)
            );
        }
        other => panic!("expected list, got {other:?}"),
    }
}

#[test]
fn zoned_timestamp_column_types_keep_their_zone() {
    let column_type = ColumnType::Timestamp {
        unit: CoreTimeUnit::Nanosecond,
        timezone: Some("+00:00".to_string()),
    };

    assert_eq!(
        column_type_to_arrow(&column_type),
        DataType::Timestamp(TimeUnit::Nanosecond, Some("+00:00".into()))
    );
}
