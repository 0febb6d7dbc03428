use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::BastError;
use crate::highlight::HighlightConfig;

/// Tool-level settings, read from a JSON file.
///
/// Every key is optional; omitted keys keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BastConfig {
    pub highlight: HighlightConfig,
    /// Custom form definition to use instead of the built-in preset.
    pub form: Option<PathBuf>,
    /// Source sheet holding the records (first sheet when unset).
    pub sheet: Option<String>,
}

impl BastConfig {
    /// Load from `path`, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, BastError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|e| BastError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(&content, path)
    }

    pub fn parse(json: &str, source: &Path) -> Result<Self, BastError> {
        let config: BastConfig = serde_json::from_str(json).map_err(|e| BastError::ConfigLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;

        config
            .highlight
            .validate()
            .map_err(|reason| BastError::ConfigLoad {
                path: source.to_path_buf(),
                reason,
            })?;

        Ok(config)
    }
}
