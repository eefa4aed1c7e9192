//! Arrow-independent core of `model2arrow`.
//!
//! This crate provides the record model IR consumed by the engine
//! ([`RecordDef`] / [`FieldDescriptor`] / [`TypeAnnotation`]), the column
//! schema IR it produces ([`Schema`] / [`SchemaField`] / [`ColumnType`]), and
//! the recursive type-resolution engine ([`Resolver`]) that maps one onto the
//! other.
//!
//! # Typical Flow
//! ```rust
//! use model2arrow_core::{
//!     resolve_record_schema, ColumnType, FieldDescriptor, RecordDef, ScalarKind, SchemaOptions,
//!     TypeAnnotation,
//! };
//!
//! let record = RecordDef::new(
//!     "User",
//!     vec![
//!         FieldDescriptor::new("name", ScalarKind::Str),
//!         FieldDescriptor::new("nickname", TypeAnnotation::optional(ScalarKind::Str)),
//!     ],
//! );
//! let schema = resolve_record_schema(&record, &SchemaOptions::default()).unwrap();
//! assert_eq!(schema[0].column_type, ColumnType::String);
//! assert!(schema[1].nullable);
//! ```

mod error;
pub mod model;
pub mod resolve;
mod schema;

pub use error::SchemaCreationError;
pub use model::{
    AliasCandidates, AliasGenerator, Constraint, EnumDef, FieldDescriptor, LiteralValue, Model,
    NameGenerator, RecordDef, ScalarKind, TypeAnnotation,
};
pub use resolve::{
    AliasPrecedence, DEFAULT_MAX_DEPTH, Normalized, Resolver, SchemaOptions, TypeRegistry,
    UuidSupport, normalize, resolve_name, resolve_record_schema, resolve_schema,
};
pub use schema::{ColumnType, ElementDef, Schema, SchemaField, TimeUnit, format_schema};
