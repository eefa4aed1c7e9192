use std::{
    fmt::{Display, Formatter, Result},
    ops::Deref,
};

use serde::{Deserialize, Serialize};

/// Resolution of timestamp and time-of-day columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Second,
    Millisecond,
    Microsecond,
    Nanosecond,
}

impl TimeUnit {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            TimeUnit::Second => "s",
            TimeUnit::Millisecond => "ms",
            TimeUnit::Microsecond => "us",
            TimeUnit::Nanosecond => "ns",
        }
    }
}

/// Arrow-independent column type for schema intermediate representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    String,
    Bool,
    Int32,
    Int64,
    UInt64,
    Float64,
    Binary,
    Date32,
    Timestamp {
        unit: TimeUnit,
        timezone: Option<String>,
    },
    Time64(TimeUnit),
    Decimal128 {
        precision: u8,
        scale: i8,
    },
    /// Dictionary-encoded column: integer indices into a value table.
    Dictionary {
        index: Box<ColumnType>,
        value: Box<ColumnType>,
    },
    List(Box<ElementDef>),
    Map {
        key: Box<ElementDef>,
        value: Box<ElementDef>,
    },
    Struct(Schema),
    /// 16-byte fixed-width UUID.
    Uuid,
}

impl ColumnType {
    pub fn is_primitive(&self) -> bool {
        !matches!(
            self,
            ColumnType::Struct(_) | ColumnType::List(_) | ColumnType::Map { .. }
        )
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Bool => "bool",
            ColumnType::Int32 => "int32",
            ColumnType::Int64 => "int64",
            ColumnType::UInt64 => "uint64",
            ColumnType::Float64 => "float64",
            ColumnType::Binary => "binary",
            ColumnType::Date32 => "date32",
            ColumnType::Timestamp { .. } => "timestamp",
            ColumnType::Time64(_) => "time64",
            ColumnType::Decimal128 { .. } => "decimal128",
            ColumnType::Dictionary { .. } => "dictionary",
            ColumnType::List(_) => "list",
            ColumnType::Map { .. } => "map",
            ColumnType::Struct(_) => "struct",
            ColumnType::Uuid => "uuid",
        }
    }

    /// Dictionary of 32-bit indices into a string table.
    pub fn string_dictionary() -> Self {
        ColumnType::Dictionary {
            index: Box::new(ColumnType::Int32),
            value: Box::new(ColumnType::String),
        }
    }

    pub fn list_of(item: ColumnType) -> Self {
        ColumnType::List(Box::new(ElementDef::new(item, true)))
    }
}

/// Primitive types render with their parameters, compound types by name.
impl Display for ColumnType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ColumnType::Timestamp {
                unit,
                timezone: None,
            } => write!(f, "timestamp[{}]", unit.abbreviation()),
            ColumnType::Timestamp {
                unit,
                timezone: Some(tz),
            } => write!(f, "timestamp[{}, tz={tz}]", unit.abbreviation()),
            ColumnType::Time64(unit) => write!(f, "time64[{}]", unit.abbreviation()),
            ColumnType::Decimal128 { precision, scale } => {
                write!(f, "decimal128({precision}, {scale})")
            }
            ColumnType::Dictionary { index, value } => write!(f, "dictionary<{index}, {value}>"),
            other => f.write_str(other.type_name()),
        }
    }
}

/// Nested element definition used in list items and map entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementDef {
    pub column_type: ColumnType,
    pub nullable: bool,
}

impl ElementDef {
    pub fn new(column_type: ColumnType, nullable: bool) -> Self {
        Self {
            column_type,
            nullable,
        }
    }
}

/// One resolved column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,
    pub column_type: ColumnType,
    pub nullable: bool,
}

impl SchemaField {
    pub fn new(name: impl Into<String>, column_type: ColumnType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable,
        }
    }
}

/// Ordered collection of [`SchemaField`] used for top-level schemas and struct members.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema(pub Vec<SchemaField>);

impl Schema {
    pub fn new(fields: Vec<SchemaField>) -> Self {
        Self(fields)
    }

    pub fn as_slice(&self) -> &[SchemaField] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemaField> {
        self.0.iter()
    }

    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.0.iter().find(|f| f.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|f| f.name.as_str()).collect()
    }
}

impl From<Vec<SchemaField>> for Schema {
    fn from(value: Vec<SchemaField>) -> Self {
        Self(value)
    }
}

impl From<Schema> for Vec<SchemaField> {
    fn from(value: Schema) -> Self {
        value.0
    }
}

impl AsRef<[SchemaField]> for Schema {
    fn as_ref(&self) -> &[SchemaField] {
        self.as_slice()
    }
}

impl Deref for Schema {
    type Target = [SchemaField];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = super::format_schema(self.as_slice())?;
        f.write_str(&text)
    }
}
