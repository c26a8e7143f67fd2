//! Configuration loading.
//!
//! An [`IngestConfig`] is a plain value handed to the entry points by
//! reference. It can be built programmatically or loaded from TOML, YAML, or
//! JSON files.

use crate::{IngestError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of bytes previewed for files without a dedicated extractor.
pub const DEFAULT_BINARY_PREVIEW_BYTES: usize = 1024;

/// Ingestion configuration.
///
/// # Example
///
/// ```rust
/// use docingest::IngestConfig;
///
/// let config = IngestConfig::default();
/// assert_eq!(config.binary_preview_bytes, 1024);
///
/// // let config = IngestConfig::from_toml_file("docingest.toml")?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IngestConfig {
    /// How many leading bytes of an unrecognized file are hex-encoded
    #[serde(default = "default_binary_preview_bytes")]
    pub binary_preview_bytes: usize,

    /// Maximum concurrent ingestions in batch operations (None = num_cpus * 2)
    #[serde(default)]
    pub max_concurrent_ingestions: Option<usize>,
}

fn default_binary_preview_bytes() -> usize {
    DEFAULT_BINARY_PREVIEW_BYTES
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            binary_preview_bytes: DEFAULT_BINARY_PREVIEW_BYTES,
            max_concurrent_ingestions: None,
        }
    }
}

impl IngestConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `IngestError::Validation` if the file can't be read, is not valid
    /// TOML, or holds out-of-range values.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = read_config(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| IngestError::validation(format!("Invalid TOML in {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = read_config(path)?;
        let config: Self = serde_yaml_ng::from_str(&content)
            .map_err(|e| IngestError::validation(format!("Invalid YAML in {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = read_config(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| IngestError::validation(format!("Invalid JSON in {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, choosing the format from the file extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("toml") => Self::from_toml_file(path),
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(IngestError::validation(format!(
                "Unsupported config file format: {} (expected .toml, .yaml, .yml or .json)",
                path.display()
            ))),
        }
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.binary_preview_bytes == 0 {
            return Err(IngestError::validation("binary_preview_bytes must be greater than 0"));
        }
        if self.max_concurrent_ingestions == Some(0) {
            return Err(IngestError::validation(
                "max_concurrent_ingestions must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Effective batch concurrency.
    pub fn concurrency_limit(&self) -> usize {
        self.max_concurrent_ingestions
            .unwrap_or_else(|| num_cpus::get() * 2)
            .max(1)
    }
}

fn read_config(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| IngestError::validation(format!("Failed to read config file {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = IngestConfig::default();
        assert_eq!(config.binary_preview_bytes, 1024);
        assert!(config.max_concurrent_ingestions.is_none());
        assert!(config.validate().is_ok());
        assert!(config.concurrency_limit() >= 2);
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("docingest.toml");

        fs::write(
            &config_path,
            r#"
binary_preview_bytes = 256
max_concurrent_ingestions = 4
        "#,
        )
        .unwrap();

        let config = IngestConfig::from_toml_file(&config_path).unwrap();
        assert_eq!(config.binary_preview_bytes, 256);
        assert_eq!(config.concurrency_limit(), 4);
    }

    #[test]
    fn test_from_toml_file_uses_defaults_for_missing_keys() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("docingest.toml");
        fs::write(&config_path, "").unwrap();

        let config = IngestConfig::from_toml_file(&config_path).unwrap();
        assert_eq!(config, IngestConfig::default());
    }

    #[test]
    fn test_from_yaml_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("docingest.yaml");
        fs::write(&config_path, "binary_preview_bytes: 64\n").unwrap();

        let config = IngestConfig::from_file(&config_path).unwrap();
        assert_eq!(config.binary_preview_bytes, 64);
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("docingest.json");
        fs::write(&config_path, r#"{"max_concurrent_ingestions": 2}"#).unwrap();

        let config = IngestConfig::from_file(&config_path).unwrap();
        assert_eq!(config.max_concurrent_ingestions, Some(2));
        assert_eq!(config.binary_preview_bytes, DEFAULT_BINARY_PREVIEW_BYTES);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("docingest.toml");
        fs::write(&config_path, "use_cache = true\n").unwrap();

        let err = IngestConfig::from_toml_file(&config_path).unwrap_err();
        assert!(matches!(err, IngestError::Validation { .. }));
    }

    #[test]
    fn test_zero_preview_rejected() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("docingest.toml");
        fs::write(&config_path, "binary_preview_bytes = 0\n").unwrap();

        let err = IngestConfig::from_toml_file(&config_path).unwrap_err();
        assert!(err.to_string().contains("binary_preview_bytes"));
    }

    #[test]
    fn test_missing_config_file() {
        let err = IngestConfig::from_toml_file("/nonexistent/docingest.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_unsupported_config_extension() {
        let err = IngestConfig::from_file("docingest.ini").unwrap_err();
        assert!(err.to_string().contains("Unsupported config file format"));
    }
}
