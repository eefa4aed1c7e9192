mod format;
mod input;

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use format::OutputFormat;
use input::ModelFile;
use model2arrow::core::{AliasPrecedence, resolve_record_schema};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "modelschema",
    about = "Print the Arrow schema derived from a JSON record model"
)]
struct Cli {
    /// Path to the JSON model definition
    input: PathBuf,

    /// Accept datetime types that may carry a timezone, dropping the zone
    #[arg(long)]
    allow_losing_tz: bool,

    /// Skip fields marked as excluded
    #[arg(long)]
    exclude_fields: bool,

    /// Name columns by their serialization alias
    #[arg(long)]
    by_alias: bool,

    /// Alias semantics for fields with only a validation alias
    #[arg(long, value_enum)]
    alias_precedence: Option<PrecedenceArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Tree)]
    format: OutputFormat,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum PrecedenceArg {
    GeneratorOverrides,
    ValidationSuppresses,
}

impl From<PrecedenceArg> for AliasPrecedence {
    fn from(value: PrecedenceArg) -> Self {
        match value {
            PrecedenceArg::GeneratorOverrides => AliasPrecedence::GeneratorOverridesValidationAlias,
            PrecedenceArg::ValidationSuppresses => {
                AliasPrecedence::ValidationAliasSuppressesGenerator
            }
        }
    }
}

impl Cli {
    fn run(self) -> Result<()> {
        let ModelFile { record, options } = ModelFile::load(&self.input)?;

        let mut options = options;
        if self.allow_losing_tz {
            options = options.with_allow_losing_tz(true);
        }
        if self.exclude_fields {
            options = options.with_exclude_fields(true);
        }
        if self.by_alias {
            options = options.with_by_alias(true);
        }
        if let Some(precedence) = self.alias_precedence {
            options = options.with_alias_precedence(precedence.into());
        }
        tracing::debug!(record = %record.name, ?options, "resolving model");

        let schema = resolve_record_schema(&record, &options)
            .with_context(|| format!("failed to resolve schema of record {}", record.name))?;
        let text = self.format.render(&schema)?;

        match self.output {
            Some(path) => fs::write(&path, format!("{text}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?,
            None => println!("{text}"),
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    Cli::parse().run()
}
