use std::{fs, path::Path};

use anyhow::{Context, Result};
use model2arrow::core::{RecordDef, SchemaOptions};
use serde::Deserialize;

/// Contents of a model definition file.
///
/// Options given in the file are the baseline; command-line flags can only
/// switch them on.
#[derive(Debug, Deserialize)]
pub struct ModelFile {
    pub record: RecordDef,
    #[serde(default)]
    pub options: SchemaOptions,
}

impl ModelFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let model: ModelFile = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse model file {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            record = %model.record.name,
            fields = model.record.fields.len(),
            "loaded model file"
        );
        Ok(model)
    }
}
