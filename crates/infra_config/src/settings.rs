//! Pipeline configuration structure.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable overriding `input-file`.
pub const ENV_INPUT_FILE: &str = "VALCURS_INPUT_FILE";

/// Environment variable overriding `output-file`.
pub const ENV_OUTPUT_FILE: &str = "VALCURS_OUTPUT_FILE";

/// Input and output paths for one pipeline run.
///
/// ```yaml
/// input-file: data/daily.xml
/// output-file: out/rates.json
/// ```
///
/// Missing keys default to empty paths; they are not validated here and
/// fail when the file is opened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PipelineConfig {
    /// Source XML document
    #[serde(rename = "input-file", default)]
    pub input_file: PathBuf,

    /// Destination JSON file
    #[serde(rename = "output-file", default)]
    pub output_file: PathBuf,
}

impl PipelineConfig {
    /// Create a configuration from explicit paths.
    pub fn new(input_file: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
            output_file: output_file.into(),
        }
    }

    /// Load configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_yaml_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        tracing::debug!(
            path = %path.display(),
            input_file = %config.input_file.display(),
            output_file = %config.output_file.display(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Decode configuration from YAML text.
    ///
    /// An empty or null document yields the default configuration.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        match serde_yaml::from_str::<serde_yaml::Value>(content)? {
            serde_yaml::Value::Null => Ok(Self::default()),
            value => serde_yaml::from_value(value),
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var_os(key))
    }

    /// Apply overrides from an arbitrary lookup; empty values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        if let Some(input) = lookup(ENV_INPUT_FILE).filter(|v| !v.is_empty()) {
            self.input_file = PathBuf::from(input);
        }

        if let Some(output) = lookup(ENV_OUTPUT_FILE).filter(|v| !v.is_empty()) {
            self.output_file = PathBuf::from(output);
        }

        self
    }

    /// Names of the keys whose paths are empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.input_file.as_os_str().is_empty() {
            missing.push("input-file");
        }
        if self.output_file.as_os_str().is_empty() {
            missing.push("output-file");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_yaml_deserialization() {
        let yaml = "input-file: data/daily.xml\noutput-file: out/rates.json\n";
        let config = PipelineConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config, PipelineConfig::new("data/daily.xml", "out/rates.json"));
    }

    #[test]
    fn test_partial_yaml_uses_empty_paths() {
        let config = PipelineConfig::from_yaml_str("input-file: in.xml\n").unwrap();
        assert_eq!(config.input_file, PathBuf::from("in.xml"));
        assert!(config.output_file.as_os_str().is_empty());
        assert_eq!(config.missing_fields(), vec!["output-file"]);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let yaml = "input-file: a.xml\noutput-file: b.json\nlog-level: debug\n";
        assert!(PipelineConfig::from_yaml_str(yaml).is_ok());
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(
            PipelineConfig::from_yaml_str("").unwrap(),
            PipelineConfig::default()
        );
        assert_eq!(
            PipelineConfig::from_yaml_str("~\n").unwrap(),
            PipelineConfig::default()
        );
        assert_eq!(
            PipelineConfig::default().missing_fields(),
            vec!["input-file", "output-file"]
        );
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(PipelineConfig::from_yaml_str("input-file: [unclosed").is_err());
        assert!(PipelineConfig::from_yaml_str("just a string").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "input-file: in.xml").unwrap();
        writeln!(file, "output-file: out/result.json").unwrap();

        let config = PipelineConfig::load(file.path()).unwrap();
        assert_eq!(config, PipelineConfig::new("in.xml", "out/result.json"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");

        match PipelineConfig::load(&path) {
            Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_reports_parse_error_with_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "input-file: [unclosed").unwrap();

        let err = PipelineConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("failed to decode config file"));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [(ENV_OUTPUT_FILE, "/tmp/override.json")].into();
        let config = PipelineConfig::new("in.xml", "out.json")
            .with_overrides(|key| env.get(key).map(OsString::from));

        assert_eq!(config.input_file, PathBuf::from("in.xml"));
        assert_eq!(config.output_file, PathBuf::from("/tmp/override.json"));
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let config = PipelineConfig::new("in.xml", "out.json")
            .with_overrides(|_| Some(OsString::new()));
        assert_eq!(config, PipelineConfig::new("in.xml", "out.json"));
    }
}
