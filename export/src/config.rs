//! Exporter configuration.
//!
//! Loads optional `.cyberfortify/export.toml` from the project root. Every
//! key is optional; CLI flags override file values.

use std::path::{Path, PathBuf};

use cyberfortify_site::{DEFAULT_DESCRIPTION, DEFAULT_LANG, DEFAULT_TITLE, PageOptions};
use serde::Deserialize;

use crate::error::ExportError;

pub const CONFIG_DIR: &str = ".cyberfortify";
pub const CONFIG_FILE: &str = "export.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Output directory, relative to the project root unless absolute
    pub out_dir: PathBuf,
    pub file_name: String,
    pub title: String,
    pub lang: String,
    pub description: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
            file_name: "index.html".to_string(),
            title: DEFAULT_TITLE.to_string(),
            lang: DEFAULT_LANG.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl ExportConfig {
    /// Load config from `.cyberfortify/export.toml` in the given root directory.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load config from a specific path, falling back to defaults.
    pub fn load_from_path(path: &Path) -> Self {
        match Self::try_load_from_path(path) {
            Ok(Some(config)) => {
                tracing::debug!(path = %path.display(), "loaded export config");
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!("{e}: {}; using defaults", source_message(&e));
                Self::default()
            }
        }
    }

    /// Strict variant: `Ok(None)` when the file is absent.
    pub fn try_load_from_path(path: &Path) -> Result<Option<Self>, ExportError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path).map_err(|source| ExportError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ExportError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(config))
    }

    /// Where the page is written for a given project root.
    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.out_dir).join(&self.file_name)
    }

    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            title: self.title.clone(),
            lang: self.lang.clone(),
            description: self.description.clone(),
        }
    }
}

fn source_message(e: &ExportError) -> String {
    std::error::Error::source(e)
        .map(|s| s.to_string())
        .unwrap_or_default()
}
