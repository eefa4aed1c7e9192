//! Derive Arrow schemas from annotated record models.
//!
//! This crate ties the resolution engine in [`core`] to the Arrow conversion
//! in [`arrow`]. Most callers only need [`get_arrow_schema`].
//!
//! ```rust
//! use model2arrow::{
//!     core::{FieldDescriptor, Model, RecordDef, ScalarKind, SchemaOptions, TypeAnnotation},
//!     get_arrow_schema,
//! };
//!
//! struct Reading;
//!
//! impl Model for Reading {
//!     fn record_def() -> RecordDef {
//!         RecordDef::new(
//!             "Reading",
//!             vec![
//!                 FieldDescriptor::new("sensor", ScalarKind::Str),
//!                 FieldDescriptor::new("value", TypeAnnotation::optional(ScalarKind::Float)),
//!             ],
//!         )
//!     }
//! }
//!
//! let schema = get_arrow_schema::<Reading>(&SchemaOptions::default()).unwrap();
//! assert!(schema.field(1).is_nullable());
//! ```
mod schema;

pub use model2arrow_arrow as arrow;
pub use model2arrow_core as core;
pub use schema::{get_arrow_schema, record_to_arrow_schema};
