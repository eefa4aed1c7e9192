//! Error types for schema resolution.

/// Error returned when a record cannot be resolved into a [`Schema`](crate::Schema).
///
/// Failures inside a field are wrapped in [`SchemaCreationError::Field`], once
/// per enclosing field, so a failure in a nested record carries the outer and
/// inner field names.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaCreationError {
    /// No dispatch entry matches the type shape.
    #[error("unknown type: {type_name}")]
    UnknownType { type_name: String },

    /// The field declares no type at all.
    #[error("missing type for field {field}")]
    MissingFieldType { field: String },

    /// A lower-bound constraint's value is not an integer.
    #[error("{constraint} metadata must be int, got {value}")]
    InvalidConstraintType {
        constraint: &'static str,
        value: String,
    },

    /// A decimal type lacks precision/scale metadata.
    #[error("decimal type needs annotation setting max_digits and decimal_places")]
    MissingDecimalMetadata,

    /// Precision/scale do not fit a 128-bit decimal column.
    #[error(
        "decimal precision must be in 1..={max} and scale must not exceed it, got max_digits={precision}, decimal_places={scale}"
    )]
    InvalidDecimalPrecision { precision: u8, scale: i8, max: u8 },

    /// Enum or literal values are neither all strings nor all integers.
    #[error("literal type is only supported with all int or all string values, got [{values}]")]
    InvalidLiteralMixedTypes { values: String },

    /// A timestamp that may carry a timezone, without `allow_losing_tz`.
    #[error("{type_name} only allowed if ok losing timezone information")]
    TimezoneNotAllowed { type_name: String },

    /// UUID column requested but the target format version does not support it.
    #[error("uuid columns require columnar format version {minimum_version} or later")]
    UnsupportedUuidVersion { minimum_version: String },

    /// A union with more than one non-null arm.
    #[error("only unions of a single type with null are supported, got {type_name}")]
    UnsupportedUnion { type_name: String },

    /// Two fields of one record resolve to the same column name.
    #[error("duplicate column name '{name}'")]
    DuplicateColumnName { name: String },

    /// Type nesting is deeper than [`SchemaOptions::max_depth`](crate::SchemaOptions::max_depth).
    #[error("type nesting exceeds the depth limit of {limit}")]
    NestingTooDeep { limit: usize },

    /// Failure while resolving one field.
    #[error("error processing field {field}: {type_name}, {source}")]
    Field {
        field: String,
        type_name: String,
        #[source]
        source: Box<SchemaCreationError>,
    },
}

impl SchemaCreationError {
    /// Field names from the outermost to the innermost failing field.
    pub fn field_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let mut current = self;
        while let SchemaCreationError::Field { field, source, .. } = current {
            path.push(field.as_str());
            current = &**source;
        }
        path
    }

    /// The innermost error, with all field context stripped.
    pub fn root_cause(&self) -> &SchemaCreationError {
        let mut current = self;
        while let SchemaCreationError::Field { source, .. } = current {
            current = &**source;
        }
        current
    }
}
