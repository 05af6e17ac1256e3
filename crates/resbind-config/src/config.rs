use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The optional `resbind.toml` plugin configuration.
///
/// The plugin works with zero configuration; this file only exists to pin
/// or relocate the generator executable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Explicit path to the `rswift` executable, bypassing PATH lookup.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Expected generator version; detection fails on mismatch.
    #[serde(default)]
    pub version: Option<String>,
}

impl Config {
    /// Read and parse a `resbind.toml` from the given path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(config)
    }

    /// Load `resbind.toml` from `dir`, or return defaults if the file is absent.
    ///
    /// # Errors
    /// Returns an error only if the file exists but cannot be read or parsed.
    pub fn load_or_default(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join("resbind.toml");
        if path.exists() {
            Self::from_path(&path)
        } else {
            Ok(Self::default())
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid resbind.toml at {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}
