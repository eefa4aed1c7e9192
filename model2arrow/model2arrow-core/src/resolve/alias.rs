use super::AliasPrecedence;
use crate::model::{AliasGenerator, FieldDescriptor};

/// Alias priority at which a record-level generator overrides explicit aliases.
const GENERATOR_PRIORITY: u8 = 1;

/// Pick the column name emitted for `field`.
///
/// With `by_alias` unset, the declared name is always used. Otherwise the
/// serialization alias wins over the alias, which wins over the generator
/// output, which wins over the declared name. A field with
/// `alias_priority == 1` lets the generator win over explicit aliases.
///
/// When only a validation alias is set next to a generator, `precedence`
/// decides between the generator output and the declared name.
pub fn resolve_name(
    field: &FieldDescriptor,
    generator: Option<&AliasGenerator>,
    by_alias: bool,
    precedence: AliasPrecedence,
) -> String {
    if !by_alias {
        return field.name.clone();
    }

    let aliases = &field.aliases;
    let generated = generator.map(|g| g.apply(&field.name));

    if let Some(name) = &generated
        && aliases.alias_priority == Some(GENERATOR_PRIORITY)
    {
        return name.clone();
    }
    if let Some(name) = &aliases.serialization_alias {
        return name.clone();
    }
    if let Some(name) = &aliases.alias {
        return name.clone();
    }

    match generated {
        Some(_)
            if aliases.validation_alias.is_some()
                && precedence == AliasPrecedence::ValidationAliasSuppressesGenerator =>
        {
            field.name.clone()
        }
        Some(name) => name,
        None => field.name.clone(),
    }
}
