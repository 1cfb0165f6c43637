//! Reading function specs from disk.
//!
//! Specs are JSON (`.json`) or YAML (`.yaml`, `.yml`), picked by file extension:
//!
//! ```yaml
//! subject: sumar
//! examples:
//! - arguments: [1, 1]
//!   return: 2
//! ```
//!
//! YAML reads unquoted `true`/`True`/`false` as booleans, which load as the lowercase words `true`/`false`.
//! Quote bare words whose case matters: `return: "True"`.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tester_core::FunctionSpec;

/// Errors that occur while loading a spec file
#[derive(Debug, Error)]
pub enum SpecFileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON spec: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML spec: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported spec file `{0}` (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),
}

/// Serialization format of a spec file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Json,
    Yaml,
}

impl SpecFormat {
    /// Pick the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self, SpecFileError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(SpecFormat::Json),
            Some("yaml" | "yml") => Ok(SpecFormat::Yaml),
            _ => Err(SpecFileError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parse spec text in the given format.
pub fn parse_spec(source: &str, format: SpecFormat) -> Result<FunctionSpec, SpecFileError> {
    let spec: FunctionSpec = match format {
        SpecFormat::Json => serde_json::from_str(source)?,
        SpecFormat::Yaml => serde_yaml::from_str(source)?,
    };
    Ok(spec)
}

/// Load a spec file, detecting the format from its extension.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_spec(path: &Path) -> Result<FunctionSpec, SpecFileError> {
    let format = SpecFormat::from_path(path)?;
    let source = fs::read_to_string(path)?;
    let spec = parse_spec(&source, format)?;
    tracing::debug!(subject = %spec.subject, examples = spec.examples().len(), "loaded spec");
    Ok(spec)
}
