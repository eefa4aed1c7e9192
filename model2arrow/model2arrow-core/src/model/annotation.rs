use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

use super::{Constraint, RecordDef};

/// Leaf type shapes a field can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    Str,
    Bool,
    Int,
    Float,
    Bytes,
    /// Fixed-point decimal; precision and scale come from field metadata.
    Decimal,
    Date,
    Time,
    /// Timestamp that never carries a timezone.
    NaiveDateTime,
    /// Timestamp that may or may not carry a timezone.
    DateTime,
    /// Timestamp that always carries a timezone.
    AwareDateTime,
    Uuid,
}

impl ScalarKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            ScalarKind::Str => "str",
            ScalarKind::Bool => "bool",
            ScalarKind::Int => "int",
            ScalarKind::Float => "float",
            ScalarKind::Bytes => "bytes",
            ScalarKind::Decimal => "decimal",
            ScalarKind::Date => "date",
            ScalarKind::Time => "time",
            ScalarKind::NaiveDateTime => "naive_datetime",
            ScalarKind::DateTime => "datetime",
            ScalarKind::AwareDateTime => "aware_datetime",
            ScalarKind::Uuid => "uuid",
        }
    }
}

impl Display for ScalarKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.type_name())
    }
}

/// A literal value, as found in literal types, enum variants, and constraint bounds.
///
/// Booleans count as the integers `0` and `1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
}

impl LiteralValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            LiteralValue::Int(v) => Some(*v),
            LiteralValue::Bool(v) => Some(i64::from(*v)),
            _ => None,
        }
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        LiteralValue::Int(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        LiteralValue::Str(value.to_string())
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        LiteralValue::Float(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        LiteralValue::Bool(value)
    }
}

impl Display for LiteralValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            LiteralValue::Bool(v) => write!(f, "{v}"),
            LiteralValue::Int(v) => write!(f, "{v}"),
            LiteralValue::Float(v) => write!(f, "{v:?}"),
            LiteralValue::Str(v) => write!(f, "{v:?}"),
            LiteralValue::Bytes(v) => write!(f, "bytes{v:?}"),
        }
    }
}

/// A named enumeration and its variant values in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDef {
    pub name: String,
    pub values: Vec<LiteralValue>,
}

impl EnumDef {
    pub fn new(name: impl Into<String>, values: Vec<LiteralValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Declared type shape of a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeAnnotation {
    Scalar(ScalarKind),
    /// The null arm of a union.
    Null,
    /// `T or null`.
    Optional(Box<TypeAnnotation>),
    /// General union; only `T or null` shapes resolve.
    Union(Vec<TypeAnnotation>),
    List(Box<TypeAnnotation>),
    Map {
        key: Box<TypeAnnotation>,
        value: Box<TypeAnnotation>,
    },
    /// A type carrying its own constraint list, e.g. a constrained integer.
    Annotated {
        inner: Box<TypeAnnotation>,
        metadata: Vec<Constraint>,
    },
    Literal(Vec<LiteralValue>),
    Enum(EnumDef),
    Record(RecordDef),
    /// A shape the introspection side could not map; never resolvable.
    Opaque(String),
}

impl TypeAnnotation {
    pub fn optional(inner: impl Into<TypeAnnotation>) -> Self {
        TypeAnnotation::Optional(Box::new(inner.into()))
    }

    pub fn list(elem: impl Into<TypeAnnotation>) -> Self {
        TypeAnnotation::List(Box::new(elem.into()))
    }

    pub fn map(key: impl Into<TypeAnnotation>, value: impl Into<TypeAnnotation>) -> Self {
        TypeAnnotation::Map {
            key: Box::new(key.into()),
            value: Box::new(value.into()),
        }
    }

    pub fn annotated(inner: impl Into<TypeAnnotation>, metadata: Vec<Constraint>) -> Self {
        TypeAnnotation::Annotated {
            inner: Box::new(inner.into()),
            metadata,
        }
    }

    pub fn literal<V: Into<LiteralValue>>(values: impl IntoIterator<Item = V>) -> Self {
        TypeAnnotation::Literal(values.into_iter().map(Into::into).collect())
    }

    /// Integer constrained to be strictly positive.
    pub fn positive_int() -> Self {
        Self::annotated(ScalarKind::Int, vec![Constraint::Gt(LiteralValue::Int(0))])
    }

    /// Decimal with the given precision and scale.
    pub fn decimal(max_digits: u8, decimal_places: i8) -> Self {
        Self::annotated(
            ScalarKind::Decimal,
            vec![Constraint::digits(max_digits, decimal_places)],
        )
    }
}

impl From<ScalarKind> for TypeAnnotation {
    fn from(value: ScalarKind) -> Self {
        TypeAnnotation::Scalar(value)
    }
}

impl From<RecordDef> for TypeAnnotation {
    fn from(value: RecordDef) -> Self {
        TypeAnnotation::Record(value)
    }
}

impl From<EnumDef> for TypeAnnotation {
    fn from(value: EnumDef) -> Self {
        TypeAnnotation::Enum(value)
    }
}

impl Display for TypeAnnotation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            TypeAnnotation::Scalar(kind) => write!(f, "{kind}"),
            TypeAnnotation::Null => f.write_str("null"),
            TypeAnnotation::Optional(inner) => write!(f, "optional[{inner}]"),
            TypeAnnotation::Union(arms) => {
                f.write_str("union[")?;
                write_joined(f, arms)?;
                f.write_str("]")
            }
            TypeAnnotation::List(elem) => write!(f, "list[{elem}]"),
            TypeAnnotation::Map { key, value } => write!(f, "map[{key}, {value}]"),
            TypeAnnotation::Annotated { inner, metadata } => {
                write!(f, "annotated[{inner}")?;
                for constraint in metadata {
                    write!(f, ", {constraint}")?;
                }
                f.write_str("]")
            }
            TypeAnnotation::Literal(values) => {
                f.write_str("literal[")?;
                write_joined(f, values)?;
                f.write_str("]")
            }
            TypeAnnotation::Enum(def) => write!(f, "enum {}", def.name),
            TypeAnnotation::Record(def) => write!(f, "record {}", def.name),
            TypeAnnotation::Opaque(name) => f.write_str(name),
        }
    }
}

fn write_joined<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
