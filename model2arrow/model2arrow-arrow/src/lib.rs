//! Arrow integration layer for `model2arrow`.
//!
//! Converts the column schema IR produced by `model2arrow-core`
//! ([`Schema`](model2arrow_core::Schema)) into an Arrow `Schema`. The mapping
//! follows the conventions used by this project:
//! - String enumerations become `Dictionary(Int32, Utf8)`.
//! - List items are named `item`; map entries are `entries { key, value }`
//!   with unsorted keys.
//! - UUIDs become `FixedSizeBinary(16)` tagged with the `arrow.uuid`
//!   extension name in field metadata.
//!
//! # Typical Flow
//! ```rust
//! use model2arrow_arrow::schema_to_arrow_schema;
//! use model2arrow_core::{
//!     FieldDescriptor, RecordDef, ScalarKind, SchemaOptions, resolve_record_schema,
//! };
//!
//! let record = RecordDef::new("Row", vec![FieldDescriptor::new("id", ScalarKind::Int)]);
//! let schema = resolve_record_schema(&record, &SchemaOptions::default()).unwrap();
//! let arrow_schema = schema_to_arrow_schema(&schema);
//! assert_eq!(arrow_schema.field(0).name(), "id");
//! ```
pub mod schema_convert;

/// Re-exports from [`schema_convert`].
pub use schema_convert::{column_type_to_arrow, schema_to_arrow_schema};

/// Field metadata key naming an Arrow extension type.
pub const EXTENSION_NAME_KEY: &str = "ARROW:extension:name";
/// Canonical extension name of UUID columns.
pub const UUID_EXTENSION_NAME: &str = "arrow.uuid";
pub(crate) const UUID_BYTE_WIDTH: i32 = 16;
