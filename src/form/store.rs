use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::form::values::FieldValues;

/// File the last-used values are kept in when no path is given
pub const DEFAULT_DESIGN_FILE: &str = "toroid.toml";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed design file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize design file: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Persisted state of the form: core name plus the raw field strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DesignFile {
    #[serde(default)]
    pub core_name: String,

    #[serde(default)]
    pub fields: FieldValues,
}

impl DesignFile {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn load_from_str(content: &str) -> Result<Self, StoreError> {
        let file: DesignFile = toml::from_str(content)?;
        Ok(file)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load_from_str(&content)
    }

    /// Load `path`, or start from an empty form if it does not exist yet
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!("No design file found at {}, starting empty", path.display());
            return Ok(Self::empty());
        }
        Self::load_from_file(path)
    }

    pub fn to_toml_string(&self) -> Result<String, StoreError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Saved design values to {}", path.display());
        Ok(())
    }
}
