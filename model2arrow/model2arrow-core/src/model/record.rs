use std::{
    fmt::{Debug, Formatter},
    sync::Arc,
};

use serde::{Deserialize, Serialize};

use super::{Constraint, TypeAnnotation};

/// Host types that can describe themselves as a [`RecordDef`].
///
/// This is the seam to the model-introspection side: the engine only ever
/// reads the returned value.
pub trait Model {
    fn record_def() -> RecordDef;
}

/// Introspected description of a record: ordered fields plus record-level
/// naming configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDef {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias_generator: Option<AliasGenerator>,
}

impl RecordDef {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
            alias_generator: None,
        }
    }

    pub fn with_alias_generator(mut self, generator: AliasGenerator) -> Self {
        self.alias_generator = Some(generator);
        self
    }
}

/// Introspected description of one record field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    /// `None` when the field declares no type at all.
    #[serde(rename = "type", default)]
    pub annotation: Option<TypeAnnotation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<Constraint>,
    /// Excluded from serialization output.
    #[serde(default)]
    pub exclude: bool,
    #[serde(flatten)]
    pub aliases: AliasCandidates,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, annotation: impl Into<TypeAnnotation>) -> Self {
        Self {
            name: name.into(),
            annotation: Some(annotation.into()),
            metadata: Vec::new(),
            exclude: false,
            aliases: AliasCandidates::default(),
        }
    }

    /// A field whose type is unset.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotation: None,
            metadata: Vec::new(),
            exclude: false,
            aliases: AliasCandidates::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: Vec<Constraint>) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn excluded(mut self) -> Self {
        self.exclude = true;
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.alias = Some(alias.into());
        self
    }

    pub fn with_validation_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.validation_alias = Some(alias.into());
        self
    }

    pub fn with_serialization_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.serialization_alias = Some(alias.into());
        self
    }

    pub fn with_alias_priority(mut self, priority: u8) -> Self {
        self.aliases.alias_priority = Some(priority);
        self
    }
}

/// Candidate names configured on a field besides its declared name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasCandidates {
    /// Alias used for both validation and serialization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serialization_alias: Option<String>,
    /// `1` lets a record-level generator override explicit aliases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias_priority: Option<u8>,
}

/// Record-level function deriving an alias from a declared field name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AliasGenerator {
    /// `snake_case` → `snakeCase`
    Camel,
    /// `snake_case` → `SnakeCase`
    Pascal,
    /// `camelCase` → `camel_case`
    Snake,
    #[serde(skip)]
    Custom(NameGenerator),
}

impl AliasGenerator {
    pub fn custom(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        AliasGenerator::Custom(NameGenerator(Arc::new(f)))
    }

    pub fn apply(&self, name: &str) -> String {
        match self {
            AliasGenerator::Camel => to_camel(name),
            AliasGenerator::Pascal => to_pascal(name),
            AliasGenerator::Snake => to_snake(name),
            AliasGenerator::Custom(generator) => (generator.0)(name),
        }
    }
}

/// Shared user-supplied naming function.
#[derive(Clone)]
pub struct NameGenerator(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl Debug for NameGenerator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("NameGenerator(..)")
    }
}

impl PartialEq for NameGenerator {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

fn to_pascal(name: &str) -> String {
    name.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

fn to_camel(name: &str) -> String {
    let pascal = to_pascal(name);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => pascal,
    }
}

fn to_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower_or_digit = false;
    for c in name.chars() {
        if c == '-' {
            out.push('_');
            prev_lower_or_digit = false;
        } else if c.is_uppercase() {
            if prev_lower_or_digit {
                out.push('_');
            }
            out.extend(c.to_lowercase());
            prev_lower_or_digit = false;
        } else {
            out.push(c);
            prev_lower_or_digit = c.is_lowercase() || c.is_ascii_digit();
        }
    }
    out
}
