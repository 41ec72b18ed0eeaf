//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`. Every field has a default, so
//! running without a file is the same as running with an empty one.
//!
//! ```yaml
//! schema_case_marker: schema
//! default_mode: literal
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use respcheck_schema::{ResponseValidation, SCHEMA_CASE_MARKER};

/// Settings shared by all subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Test-case id that selects schema-derived validation in `replay`.
    pub schema_case_marker: String,
    /// Mode used by `check` when `--mode` is not given.
    pub default_mode: ResponseValidation,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            schema_case_marker: SCHEMA_CASE_MARKER.to_string(),
            default_mode: ResponseValidation::LiteralEquality,
        }
    }
}

/// Load the configuration file at `path`, or the defaults when absent.
pub fn load_config(path: Option<&Path>) -> Result<CliConfig> {
    let Some(path) = path else {
        return Ok(CliConfig::default());
    };
    let content = crate::read_document(path)?;
    if content.trim().is_empty() {
        return Ok(CliConfig::default());
    }
    let config: CliConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("invalid configuration in {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_gives_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.schema_case_marker, "schema");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("respcheck.yaml");
        std::fs::write(&path, "default_mode: schema\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.default_mode, ResponseValidation::SchemaDerived);
        assert_eq!(config.schema_case_marker, SCHEMA_CASE_MARKER);
    }

    #[test]
    fn custom_marker_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("respcheck.yaml");
        std::fs::write(&path, "schema_case_marker: SHAPE\ndefault_mode: literal\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.schema_case_marker, "SHAPE");
        assert_eq!(config.default_mode, ResponseValidation::LiteralEquality);
    }

    #[test]
    fn empty_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("respcheck.yaml");
        std::fs::write(&path, "").unwrap();
        assert_eq!(load_config(Some(&path)).unwrap(), CliConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("respcheck.yaml");
        std::fs::write(&path, "strict: true\n").unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("invalid configuration"));
    }

    #[test]
    fn unreadable_path_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/respcheck.yaml"))).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
