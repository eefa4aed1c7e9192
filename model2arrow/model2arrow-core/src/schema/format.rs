use std::fmt::{Error, Result, Write as _};

use super::{ColumnType, SchemaField};

/// Format schema fields in a readable style:
/// primitive columns are rendered in one line, compound columns are pretty-printed.
/// Nested columns follow the same rule.
pub fn format_schema(fields: impl AsRef<[SchemaField]>) -> std::result::Result<String, Error> {
    let mut out = String::new();

    for field in fields.as_ref() {
        format_labeled_type(&field.name, &field.column_type, field.nullable, 0, &mut out)?;
    }

    Ok(out)
}

fn format_compound(
    column_type: &ColumnType,
    nullable: bool,
    indent: usize,
    out: &mut String,
) -> Result {
    let pad = " ".repeat(indent);
    writeln!(out, "{pad}type: {}", column_type.type_name())?;
    writeln!(out, "{pad}nullable: {nullable}")?;

    match column_type {
        ColumnType::Struct(fields) => {
            writeln!(out, "{pad}fields:")?;
            for child in fields.iter() {
                format_labeled_type(
                    &child.name,
                    &child.column_type,
                    child.nullable,
                    indent + 4,
                    out,
                )?;
            }
        }
        ColumnType::List(item) => {
            format_labeled_type("item", &item.column_type, item.nullable, indent, out)?;
        }
        ColumnType::Map { key, value } => {
            format_labeled_type("key", &key.column_type, key.nullable, indent, out)?;
            format_labeled_type("value", &value.column_type, value.nullable, indent, out)?;
        }
        _ => unreachable!("{column_type:?} is not a compound type"),
    }

    Ok(())
}

fn format_labeled_type(
    label: &str,
    column_type: &ColumnType,
    nullable: bool,
    indent: usize,
    out: &mut String,
) -> Result {
    let pad = " ".repeat(indent);
    if column_type.is_primitive() {
        writeln!(
            out,
            "{pad}{label}: {{ type: {column_type}, nullable: {nullable} }}"
        )?;
    } else {
        writeln!(out, "{pad}{label}:")?;
        format_compound(column_type, nullable, indent + 4, out)?;
    }
    Ok(())
}
