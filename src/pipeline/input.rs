//! Loading Well-Formed Names from JSON or YAML batch files.
//!
//! A batch file is either a list of names or an object with a `names` list:
//!
//! ```yaml
//! names:
//!   - part: a
//!     vendor: microsoft
//!     product: internet_explorer
//!     version: 8\.0\.6001
//!     update: beta
//!   - part: o
//!     vendor: linux
//!     update: NA
//! ```

use crate::error::{CpeError, Result};
use crate::model::WellFormedName;
use serde::Deserialize;
use std::path::Path;

/// Serialization format of a batch file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Detect the format from a file extension
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct NamesDocument {
    names: Vec<WellFormedName>,
}

/// Read names from a batch file.
///
/// The format comes from the extension; files with any other extension are
/// tried as JSON first, then as YAML.
pub fn load_names(path: &Path) -> Result<Vec<WellFormedName>> {
    let content = std::fs::read_to_string(path).map_err(|e| CpeError::io(path, e))?;
    let context = format!("in {}", path.display());

    let names = match InputFormat::from_path(path) {
        Some(format) => parse_names_str(&content, format),
        None => parse_names_str(&content, InputFormat::Json)
            .or_else(|_| parse_names_str(&content, InputFormat::Yaml)),
    }
    .map_err(|e| match e {
        CpeError::Input { message, .. } => CpeError::input(context, message),
        other => other,
    })?;

    tracing::info!("Loaded {} names from {}", names.len(), path.display());
    Ok(names)
}

/// Parse names from batch file content in a known format.
pub fn parse_names_str(content: &str, format: InputFormat) -> Result<Vec<WellFormedName>> {
    match format {
        InputFormat::Json => parse_json(content),
        InputFormat::Yaml => parse_yaml(content),
    }
}

fn parse_json(content: &str) -> Result<Vec<WellFormedName>> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| CpeError::input("JSON", e.to_string()))?;

    if value.is_array() {
        serde_json::from_value(value).map_err(|e| CpeError::input("JSON", e.to_string()))
    } else if value.is_object() {
        serde_json::from_value::<NamesDocument>(value)
            .map(|doc| doc.names)
            .map_err(|e| CpeError::input("JSON", e.to_string()))
    } else {
        Err(CpeError::input(
            "JSON",
            "expected a list of names or an object with a 'names' list",
        ))
    }
}

fn parse_yaml(content: &str) -> Result<Vec<WellFormedName>> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| CpeError::input("YAML", e.to_string()))?;

    if value.is_sequence() {
        serde_yaml::from_value(value).map_err(|e| CpeError::input("YAML", e.to_string()))
    } else if value.is_mapping() {
        serde_yaml::from_value::<NamesDocument>(value)
            .map(|doc| doc.names)
            .map_err(|e| CpeError::input("YAML", e.to_string()))
    } else {
        Err(CpeError::input(
            "YAML",
            "expected a list of names or a mapping with a 'names' list",
        ))
    }
}
