use serde::{Deserialize, Serialize};

/// Default bound on type nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Which alias semantics apply when a field sets only a validation alias and
/// its record configures an alias generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AliasPrecedence {
    /// The generator still names the serialized column (default).
    #[default]
    GeneratorOverridesValidationAlias,
    /// Earlier semantics: a validation alias switches the generator off, so
    /// the declared name is emitted.
    ValidationAliasSuppressesGenerator,
}

/// Whether the target columnar format can store fixed-width UUID columns.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UuidSupport {
    #[default]
    Supported,
    Unsupported { minimum_version: String },
}

/// Caller-supplied configuration for one resolution call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaOptions {
    /// Accept timestamp types that may carry a timezone, dropping the zone.
    pub allow_losing_tz: bool,
    /// Skip fields marked as excluded from serialization.
    pub exclude_fields: bool,
    /// Emit aliases instead of declared field names.
    pub by_alias: bool,
    pub alias_precedence: AliasPrecedence,
    pub uuid_support: UuidSupport,
    /// Maximum nesting depth of types, counting records, containers and annotations.
    pub max_depth: usize,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self {
            allow_losing_tz: false,
            exclude_fields: false,
            by_alias: false,
            alias_precedence: AliasPrecedence::default(),
            uuid_support: UuidSupport::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SchemaOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allow_losing_tz(mut self, allow: bool) -> Self {
        self.allow_losing_tz = allow;
        self
    }

    pub fn with_exclude_fields(mut self, exclude: bool) -> Self {
        self.exclude_fields = exclude;
        self
    }

    pub fn with_by_alias(mut self, by_alias: bool) -> Self {
        self.by_alias = by_alias;
        self
    }

    pub fn with_alias_precedence(mut self, precedence: AliasPrecedence) -> Self {
        self.alias_precedence = precedence;
        self
    }

    pub fn with_uuid_support(mut self, support: UuidSupport) -> Self {
        self.uuid_support = support;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
