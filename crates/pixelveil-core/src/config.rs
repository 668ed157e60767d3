//! Transform program configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StegError;
use crate::result::Result;

fn default_program() -> PathBuf {
    PathBuf::from("./ts_sms")
}

/// Settings for the external transform program, read from a JSON file.
///
/// ```json
/// { "cuda": true, "model_path": "models/small.bin" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformConfig {
    /// Whether the transform program should use its accelerator.
    pub cuda: bool,

    /// Model resource handed to the transform program via `-m`.
    pub model_path: String,

    /// The transform program itself.
    #[serde(default = "default_program")]
    pub program: PathBuf,
}

impl TransformConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|_| StegError::ConfigNotFound(path.to_path_buf()))?;
        let config = serde_json::from_str(&content)?;

        Ok(config)
    }
}
