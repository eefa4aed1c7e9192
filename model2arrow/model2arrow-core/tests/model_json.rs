use model2arrow_core::{
    AliasGenerator, ColumnType, Constraint, FieldDescriptor, LiteralValue, RecordDef, ScalarKind,
    SchemaOptions, TypeAnnotation, UuidSupport, resolve_record_schema,
};

const ORDER_JSON: &str = r#"{
    "name": "Order",
    "alias_generator": "camel",
    "fields": [
        { "name": "order_id", "type": { "scalar": "int" }, "metadata": [{ "ge": 0 }] },
        { "name": "note", "type": { "optional": { "scalar": "str" } }, "exclude": true },
        {
            "name": "total",
            "type": { "annotated": {
                "inner": { "scalar": "decimal" },
                "metadata": [{ "digits": { "max_digits": 10, "decimal_places": 2 } }]
            } },
            "serialization_alias": "grandTotal"
        },
        { "name": "status", "type": { "literal": ["open", "closed"] } },
        {
            "name": "customer",
            "type": { "record": {
                "name": "Customer",
                "fields": [{ "name": "email", "type": { "scalar": "str" } }]
            } }
        },
        { "name": "legacy" }
    ]
}"#;

#[test]
fn record_defs_deserialize_from_json() {
    let record: RecordDef = serde_json::from_str(ORDER_JSON).unwrap();

    assert_eq!(record.name, "Order");
    assert_eq!(record.alias_generator, Some(AliasGenerator::Camel));
    assert_eq!(record.fields.len(), 6);

    let order_id = &record.fields[0];
    assert_eq!(
        order_id.annotation,
        Some(TypeAnnotation::Scalar(ScalarKind::Int))
    );
    assert_eq!(order_id.metadata, vec![Constraint::Ge(LiteralValue::Int(0))]);

    assert!(record.fields[1].exclude);
    assert_eq!(
        record.fields[2].aliases.serialization_alias.as_deref(),
        Some("grandTotal")
    );
    assert_eq!(
        record.fields[3].annotation,
        Some(TypeAnnotation::literal(["open", "closed"]))
    );
    assert_eq!(record.fields[5], FieldDescriptor::untyped("legacy"));
}

#[test]
fn json_records_resolve_like_built_ones() {
    let mut record: RecordDef = serde_json::from_str(ORDER_JSON).unwrap();
    record.fields.pop();
    let options = SchemaOptions::default()
        .with_by_alias(true)
        .with_exclude_fields(true);

    let schema = resolve_record_schema(&record, &options).unwrap();

    assert_eq!(
        schema.names(),
        vec!["orderId", "grandTotal", "status", "customer"]
    );
    assert_eq!(schema[0].column_type, ColumnType::UInt64);
    assert_eq!(
        schema[1].column_type,
        ColumnType::Decimal128 {
            precision: 10,
            scale: 2
        }
    );
}

#[test]
fn options_deserialize_with_defaults() {
    let options: SchemaOptions = serde_json::from_str(
        r#"{
            "allow_losing_tz": true,
            "alias_precedence": "validation-alias-suppresses-generator",
            "uuid_support": { "unsupported": { "minimum_version": "2.14" } }
        }"#,
    )
    .unwrap();

    let expected = SchemaOptions::default()
        .with_allow_losing_tz(true)
        .with_alias_precedence(
            model2arrow_core::AliasPrecedence::ValidationAliasSuppressesGenerator,
        )
        .with_uuid_support(UuidSupport::Unsupported {
            minimum_version: "2.14".to_string(),
        });
    assert_eq!(options, expected);
}
