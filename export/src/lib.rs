//! # cyberfortify-export
//!
//! Renders the CyberFortify landing page to a static HTML file.
//!
//! ```rust,no_run
//! use cyberfortify_export::{config::ExportConfig, write_page};
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! let config = ExportConfig::load(root);
//! let written = write_page(&config.page_options(), &config.output_path(root)).unwrap();
//! println!("{} bytes -> {}", written.bytes, written.path.display());
//! ```

pub mod config;
pub mod error;

use std::path::{Path, PathBuf};

use cyberfortify_site::{PageOptions, render_page};

pub use error::ExportError;

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Render the page and write it to `path`, creating parent directories.
pub fn write_page(options: &PageOptions, path: &Path) -> Result<Written, ExportError> {
    let html = render_page(options);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, &html).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = html.len(), "page written");
    Ok(Written {
        path: path.to_path_buf(),
        bytes: html.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_into_nested_directory() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("a").join("b").join("index.html");

        let written = write_page(&PageOptions::default(), &path).expect("export");
        assert_eq!(written.path, path);

        let html = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(html.len(), written.bytes);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("mailto:cyberfortify.contact@gmail.com"));
    }

    #[test]
    fn blocked_directory_reports_create_dir() {
        let temp = TempDir::new().expect("temp dir");
        // a regular file where a directory is expected
        let blocker = temp.path().join("dist");
        std::fs::write(&blocker, "").expect("create blocker");

        let err = write_page(&PageOptions::default(), &blocker.join("index.html"))
            .expect_err("parent is a file");
        assert!(matches!(err, ExportError::CreateDir { .. }), "{err:?}");
    }
}
