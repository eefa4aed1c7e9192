use ::arrow::datatypes::Schema;
use model2arrow_arrow::schema_to_arrow_schema;
use model2arrow_core::{Model, RecordDef, SchemaCreationError, SchemaOptions, resolve_record_schema};

/// Resolves the Arrow schema of model `M`.
pub fn get_arrow_schema<M: Model>(options: &SchemaOptions) -> Result<Schema, SchemaCreationError> {
    record_to_arrow_schema(&M::record_def(), options)
}

/// Resolves the Arrow schema of an already introspected record.
///
/// Fails with the first field error encountered; no partial schema is
/// returned.
pub fn record_to_arrow_schema(
    record: &RecordDef,
    options: &SchemaOptions,
) -> Result<Schema, SchemaCreationError> {
    let schema = resolve_record_schema(record, options)?;
    Ok(schema_to_arrow_schema(&schema))
}
