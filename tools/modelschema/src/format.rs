use std::fmt::Write;

use anyhow::Result;
use arrow::datatypes::Field;
use clap::ValueEnum;
use model2arrow::{arrow::schema_to_arrow_schema, core::{Schema, format_schema}};

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Indented column tree
    Tree,
    /// Arrow data types, one field per line
    Arrow,
    /// Column schema as JSON
    Json,
}

impl OutputFormat {
    pub fn render(&self, schema: &Schema) -> Result<String> {
        let text = match self {
            OutputFormat::Tree => format_schema(schema)?,
            OutputFormat::Arrow => {
                let arrow_schema = schema_to_arrow_schema(schema);
                let mut out = String::new();
                for (i, field) in arrow_schema.fields().iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    write_arrow_field(&mut out, field)?;
                }
                out
            }
            OutputFormat::Json => serde_json::to_string_pretty(schema)?,
        };
        Ok(text)
    }
}

fn write_arrow_field(out: &mut String, field: &Field) -> std::fmt::Result {
    write!(out, "{}: {}", field.name(), field.data_type())?;
    if field.is_nullable() {
        out.push_str(" (nullable)");
    }
    Ok(())
}
