//! Recursive type resolution: [`RecordDef`] → [`Schema`].
//!
//! Each field goes through the same steps:
//!
//! 1. **Optionality**: [`normalize`] strips one `T or null` level and records
//!    nullability.
//! 2. **Dispatch**: the annotation is matched by shape. Scalars are looked up
//!    in the [`TypeRegistry`] in this order: exact mapping, timezone-losing
//!    timestamps (gated by [`SchemaOptions::allow_losing_tz`]), UUID (gated by
//!    [`SchemaOptions::uuid_support`]), metadata-bearing scalars (integers and
//!    decimals, refined by the field's constraints). Composite shapes recurse.
//! 3. **Naming**: [`resolve_name`] picks the emitted column name.
//!
//! Any failure inside a field is wrapped with the field name and type, and the
//! whole resolution stops at the first failing field.

mod alias;
mod composite;
mod constraints;
mod optional;
mod options;
mod registry;

use std::collections::HashSet;

pub use alias::resolve_name;
pub use constraints::{MAX_DECIMAL128_PRECISION, decimal_type, int_type};
pub use optional::{Normalized, normalize};
pub use options::{AliasPrecedence, DEFAULT_MAX_DEPTH, SchemaOptions, UuidSupport};
pub use registry::{MetadataResolver, TypeRegistry};

use tracing::{debug, trace};

use crate::{
    error::SchemaCreationError,
    model::{
        AliasGenerator, Constraint, FieldDescriptor, Model, RecordDef, ScalarKind, TypeAnnotation,
    },
    schema::{ColumnType, Schema, SchemaField},
};

/// Resolve the schema of a host type describing itself through [`Model`].
pub fn resolve_schema<M: Model>(options: &SchemaOptions) -> Result<Schema, SchemaCreationError> {
    resolve_record_schema(&M::record_def(), options)
}

/// Resolve the schema of `record` with the shared default [`TypeRegistry`].
pub fn resolve_record_schema(
    record: &RecordDef,
    options: &SchemaOptions,
) -> Result<Schema, SchemaCreationError> {
    Resolver::new(TypeRegistry::shared(), options).resolve_record(record)
}

/// Stateless resolver borrowing an immutable registry and options.
///
/// A `Resolver` can be shared between threads; every call works on its own
/// inputs only.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    registry: &'a TypeRegistry,
    options: &'a SchemaOptions,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a TypeRegistry, options: &'a SchemaOptions) -> Self {
        Self { registry, options }
    }

    /// Resolve every field of `record` in declaration order.
    pub fn resolve_record(&self, record: &RecordDef) -> Result<Schema, SchemaCreationError> {
        self.assemble(record, 0)
    }

    fn assemble(&self, record: &RecordDef, depth: usize) -> Result<Schema, SchemaCreationError> {
        debug!(
            record = %record.name,
            fields = record.fields.len(),
            depth,
            "resolving record"
        );

        let mut fields = Vec::with_capacity(record.fields.len());
        let mut names = HashSet::with_capacity(record.fields.len());
        for field in &record.fields {
            if self.options.exclude_fields && field.exclude {
                debug!(record = %record.name, field = %field.name, "skipping excluded field");
                continue;
            }

            let schema_field = self.resolve_field(field, record.alias_generator.as_ref(), depth)?;
            if !names.insert(schema_field.name.clone()) {
                return Err(SchemaCreationError::DuplicateColumnName {
                    name: schema_field.name,
                });
            }
            fields.push(schema_field);
        }

        Ok(Schema::new(fields))
    }

    fn resolve_field(
        &self,
        field: &FieldDescriptor,
        generator: Option<&AliasGenerator>,
        depth: usize,
    ) -> Result<SchemaField, SchemaCreationError> {
        let Some(annotation) = &field.annotation else {
            return Err(SchemaCreationError::MissingFieldType {
                field: field.name.clone(),
            });
        };

        let normalized = normalize(annotation);
        let column_type = self
            .resolve_type(&normalized.annotation, &field.metadata, depth)
            .map_err(|source| SchemaCreationError::Field {
                field: field.name.clone(),
                type_name: normalized.annotation.to_string(),
                source: Box::new(source),
            })?;

        let name = resolve_name(
            field,
            generator,
            self.options.by_alias,
            self.options.alias_precedence,
        );
        trace!(
            field = %field.name,
            column = %name,
            column_type = %column_type,
            nullable = normalized.nullable,
            "resolved field"
        );

        Ok(SchemaField::new(name, column_type, normalized.nullable))
    }

    /// Resolve a single type shape to a column type.
    ///
    /// `metadata` is the constraint list in effect for this type; annotated
    /// types replace it with their own constraints.
    pub fn resolve_type(
        &self,
        annotation: &TypeAnnotation,
        metadata: &[Constraint],
        depth: usize,
    ) -> Result<ColumnType, SchemaCreationError> {
        if depth > self.options.max_depth {
            return Err(SchemaCreationError::NestingTooDeep {
                limit: self.options.max_depth,
            });
        }

        match annotation {
            TypeAnnotation::Scalar(kind) => self.resolve_scalar(*kind, metadata),
            TypeAnnotation::Enum(def) => composite::enum_type(def),
            TypeAnnotation::List(elem) => composite::list_type(self, elem, metadata, depth),
            TypeAnnotation::Map { key, value } => {
                composite::map_type(self, key, value, metadata, depth)
            }
            TypeAnnotation::Literal(values) => composite::literal_type(values),
            TypeAnnotation::Annotated {
                inner,
                metadata: own,
            } => self.resolve_type(inner, own, depth + 1),
            TypeAnnotation::Record(def) => self.assemble(def, depth + 1).map(ColumnType::Struct),
            TypeAnnotation::Optional(_) | TypeAnnotation::Union(_) => {
                let normalized = normalize(annotation);
                if matches!(normalized.annotation.as_ref(), TypeAnnotation::Union(_)) {
                    return Err(SchemaCreationError::UnsupportedUnion {
                        type_name: normalized.annotation.to_string(),
                    });
                }
                self.resolve_type(&normalized.annotation, metadata, depth + 1)
            }
            TypeAnnotation::Null | TypeAnnotation::Opaque(_) => {
                Err(SchemaCreationError::UnknownType {
                    type_name: annotation.to_string(),
                })
            }
        }
    }

    fn resolve_scalar(
        &self,
        kind: ScalarKind,
        metadata: &[Constraint],
    ) -> Result<ColumnType, SchemaCreationError> {
        if let Some(column_type) = self.registry.exact(kind) {
            return Ok(column_type.clone());
        }

        if let Some(column_type) = self.registry.losing_tz(kind) {
            if self.options.allow_losing_tz {
                return Ok(column_type.clone());
            }
            return Err(SchemaCreationError::TimezoneNotAllowed {
                type_name: kind.to_string(),
            });
        }

        if kind == ScalarKind::Uuid {
            return match &self.options.uuid_support {
                UuidSupport::Supported => Ok(ColumnType::Uuid),
                UuidSupport::Unsupported { minimum_version } => {
                    Err(SchemaCreationError::UnsupportedUuidVersion {
                        minimum_version: minimum_version.clone(),
                    })
                }
            };
        }

        if let Some(resolver) = self.registry.with_metadata(kind) {
            return resolver(metadata);
        }

        Err(SchemaCreationError::UnknownType {
            type_name: kind.to_string(),
        })
    }
}
