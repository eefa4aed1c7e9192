//! Scalar dispatch tables.

use std::{collections::HashMap, sync::OnceLock};

use super::constraints;
use crate::{
    error::SchemaCreationError,
    model::{Constraint, ScalarKind},
    schema::{ColumnType, TimeUnit},
};

/// Resolver for scalars whose column type depends on field metadata.
pub type MetadataResolver = fn(&[Constraint]) -> Result<ColumnType, SchemaCreationError>;

/// Immutable mapping from scalar kinds to column types.
///
/// Built once and shared by reference across resolution calls; nothing
/// mutates it after construction.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    exact: HashMap<ScalarKind, ColumnType>,
    losing_tz: HashMap<ScalarKind, ColumnType>,
    with_metadata: HashMap<ScalarKind, MetadataResolver>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        let naive_ms = ColumnType::Timestamp {
            unit: TimeUnit::Millisecond,
            timezone: None,
        };

        let exact = HashMap::from([
            (ScalarKind::Str, ColumnType::String),
            (ScalarKind::Bool, ColumnType::Bool),
            (ScalarKind::Float, ColumnType::Float64),
            (ScalarKind::Bytes, ColumnType::Binary),
            (ScalarKind::Date, ColumnType::Date32),
            (ScalarKind::NaiveDateTime, naive_ms.clone()),
            (ScalarKind::Time, ColumnType::Time64(TimeUnit::Microsecond)),
        ]);

        // The instant is kept (normalized to UTC on write); the zone is not.
        let losing_tz = HashMap::from([
            (ScalarKind::DateTime, naive_ms.clone()),
            (ScalarKind::AwareDateTime, naive_ms),
        ]);

        let with_metadata = HashMap::from([
            (ScalarKind::Int, constraints::int_type as MetadataResolver),
            (ScalarKind::Decimal, constraints::decimal_type as MetadataResolver),
        ]);

        Self {
            exact,
            losing_tz,
            with_metadata,
        }
    }

    /// Process-wide default registry.
    pub fn shared() -> &'static TypeRegistry {
        static REGISTRY: OnceLock<TypeRegistry> = OnceLock::new();
        REGISTRY.get_or_init(TypeRegistry::new)
    }

    pub fn exact(&self, kind: ScalarKind) -> Option<&ColumnType> {
        self.exact.get(&kind)
    }

    pub fn losing_tz(&self, kind: ScalarKind) -> Option<&ColumnType> {
        self.losing_tz.get(&kind)
    }

    pub fn with_metadata(&self, kind: ScalarKind) -> Option<MetadataResolver> {
        self.with_metadata.get(&kind).copied()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
