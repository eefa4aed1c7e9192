//! Arrow-independent column schema IR produced by the resolver.

mod format;
mod types;

pub use format::format_schema;
pub use types::{ColumnType, ElementDef, Schema, SchemaField, TimeUnit};
