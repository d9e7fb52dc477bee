//! Release configuration (relprep.yaml) data structures
//!
//! Fixed paths and external commands live in an explicit configuration value
//! passed into each component, so tests can substitute temp directories and
//! fake converters instead of touching global state.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RelprepError, Result};

/// Configuration file name, looked up at the workspace root
pub const CONFIG_FILE: &str = "relprep.yaml";

/// Release configuration (relprep.yaml)
///
/// Every field has a default matching the canonical repository layout, so the
/// configuration file is optional and may override any subset of fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    /// Readme source document (authoring format)
    pub readme: PathBuf,

    /// History source document (authoring format)
    pub history: PathBuf,

    /// License source document
    pub license: PathBuf,

    /// Canonical converted description artifact, checked into the repository
    pub description: PathBuf,

    /// Converter argv; `{input}` and `{output}` are substituted at invocation
    pub converter: Vec<String>,

    /// Packaging argv, run in package mode
    pub package_command: Vec<String>,

    /// Upload argv, run only after both publish gates pass
    pub publish_command: Vec<String>,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            readme: PathBuf::from("README.md"),
            history: PathBuf::from("HISTORY.md"),
            license: PathBuf::from("LICENSE"),
            description: PathBuf::from("setup_description.rst"),
            converter: vec![
                "pandoc".to_string(),
                "--write=rst".to_string(),
                "--output={output}".to_string(),
                "{input}".to_string(),
            ],
            package_command: vec![
                "python".to_string(),
                "setup.py".to_string(),
                "sdist".to_string(),
            ],
            publish_command: vec![
                "python".to_string(),
                "setup.py".to_string(),
                "sdist".to_string(),
                "upload".to_string(),
            ],
        }
    }
}

impl ReleaseConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration for a workspace root.
    ///
    /// Reads `relprep.yaml` under `root` if present, falls back to defaults
    /// otherwise, and anchors all relative paths to `root`.
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE);

        let mut config = if config_path.exists() {
            let yaml = std::fs::read_to_string(&config_path).map_err(|e| {
                RelprepError::ConfigReadFailed {
                    path: config_path.display().to_string(),
                    reason: e.to_string(),
                }
            })?;
            serde_yaml::from_str(&yaml).map_err(|e| RelprepError::ConfigParseFailed {
                path: config_path.display().to_string(),
                reason: e.to_string(),
            })?
        } else {
            Self::default()
        };

        config.anchor(root);
        Ok(config)
    }

    /// Join relative paths onto the workspace root
    fn anchor(&mut self, root: &Path) {
        for path in [
            &mut self.readme,
            &mut self.history,
            &mut self.license,
            &mut self.description,
        ] {
            if path.is_relative() {
                *path = root.join(&*path);
            }
        }
    }
}
