//! Configuration model for gcode-check.
//!
//! Settings come from an optional YAML file passed with `--config`. Parsing is
//! forward-compatible (unknown fields are ignored) and every field has a
//! default, so an empty file is valid. Command-line overrides are applied on
//! top and validated the same way.

use crate::CONFIG_BLOCK_END;
use crate::error::{GcodeError, Result};
use crate::extract::DEFAULT_LIMIT;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings shared by both tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Line (compared after trimming) that ends the configuration header.
    pub marker: String,

    /// Lines printed by `gcode-extract` after the marker.
    pub extract_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: CONFIG_BLOCK_END.to_string(),
            extract_limit: DEFAULT_LIMIT,
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(GcodeError::Read)` - The file could not be read
    /// * `Err(GcodeError::Config)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| GcodeError::read(path, e))?;
        Self::from_yaml(&content)
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file means all defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| GcodeError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides and re-validate.
    pub fn with_overrides(
        mut self,
        marker: Option<String>,
        extract_limit: Option<usize>,
    ) -> Result<Self> {
        if let Some(marker) = marker {
            self.marker = marker;
        }
        if let Some(limit) = extract_limit {
            self.extract_limit = limit;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `marker` must contain something other than whitespace
    /// - `extract_limit` must be positive
    pub fn validate(&self) -> Result<()> {
        if self.marker.trim().is_empty() {
            return Err(GcodeError::Config("marker must not be empty".to_string()));
        }

        // Lines are trimmed before matching, so an untrimmed marker could never match.
        if self.marker.trim() != self.marker {
            return Err(GcodeError::Config(format!(
                "marker must not have leading or trailing whitespace (found '{}')",
                self.marker
            )));
        }

        if self.extract_limit == 0 {
            return Err(GcodeError::Config(
                "extract_limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
