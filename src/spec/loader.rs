//! JSON spec file loading.

use crate::error::SynthError;
use crate::units::parse_size;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A byte count as written in a spec file: a number or a string with a unit suffix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeValue {
    Bytes(u64),
    Text(String),
}

impl SizeValue {
    pub fn bytes(&self) -> Result<u64, SynthError> {
        match self {
            SizeValue::Bytes(n) => Ok(*n),
            SizeValue::Text(s) => parse_size(s),
        }
    }
}

/// Raw spec record; every field is optional until resolved against a gauge
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecFile {
    #[serde(default)]
    pub folders_width: Option<u32>,
    #[serde(default)]
    pub folders_depth: Option<u32>,
    #[serde(default)]
    pub max_files_per_dir: Option<u32>,
    #[serde(default)]
    pub min_file_size: Option<SizeValue>,
    #[serde(default)]
    pub max_file_size: Option<SizeValue>,
}

impl SpecFile {
    pub fn from_json_str(json: &str) -> Result<Self, SynthError> {
        serde_json::from_str(json).map_err(|e| {
            SynthError::InvalidSpec(format!("spec is not valid JSON: {}", e))
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, SynthError> {
        let text = std::fs::read_to_string(path).map_err(|e| SynthError::io(path, e))?;
        Self::from_json_str(&text)
    }
}
