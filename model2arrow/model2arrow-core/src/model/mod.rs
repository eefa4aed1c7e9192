//! Record model IR: what the introspection side hands to the engine.
//!
//! Everything here is a plain value. Nested records are owned by the field
//! that references them, so a record graph is always a finite tree.

mod annotation;
mod constraint;
mod record;

pub use annotation::{EnumDef, LiteralValue, ScalarKind, TypeAnnotation};
pub use constraint::Constraint;
pub use record::{AliasCandidates, AliasGenerator, FieldDescriptor, Model, NameGenerator, RecordDef};
