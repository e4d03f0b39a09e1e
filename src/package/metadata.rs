//! Generated metadata directory
//!
//! An install renders the descriptor into `<root>/tvb.egg-info/` and then
//! removes that directory again. Removal is best effort: a missing directory
//! is expected and other failures are only logged.

use super::descriptor::PackageDescriptor;
use crate::error::{IoResultExt, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Outcome of an install run
#[derive(Debug, Clone)]
pub struct InstallReport {
    /// Metadata directory that was generated
    pub metadata_dir: PathBuf,
    /// Files written into it
    pub files_written: Vec<PathBuf>,
    /// Whether the cleanup step removed the directory
    pub cleaned: bool,
}

impl PackageDescriptor {
    /// Metadata directory path under `root`
    pub fn metadata_dir(&self, root: &Path) -> PathBuf {
        root.join(self.metadata_dir_name())
    }

    /// Render the metadata files into `<root>/<name>.egg-info/`.
    ///
    /// Returns the paths of the written files.
    pub fn write_metadata(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let dir = self.metadata_dir(root);
        fs::create_dir_all(&dir).with_path(&dir)?;

        let files = [
            ("PKG-INFO", self.pkg_info()),
            ("requires.txt", self.requires_txt()),
            ("top_level.txt", format!("{}\n", self.name)),
            ("dependency_links.txt", "\n".to_string()),
        ];

        let mut written = Vec::with_capacity(files.len());
        for (name, contents) in files {
            let path = dir.join(name);
            fs::write(&path, contents).with_path(&path)?;
            written.push(path);
        }

        tracing::info!("Wrote {} metadata files to {:?}", written.len(), dir);
        Ok(written)
    }

    /// Remove `<root>/<name>.egg-info/` recursively.
    ///
    /// Returns true when a directory was removed. Never fails.
    pub fn cleanup_metadata_dir(&self, root: &Path) -> bool {
        let dir = self.metadata_dir(root);
        match fs::remove_dir_all(&dir) {
            Ok(()) => {
                tracing::info!("Removed metadata directory {:?}", dir);
                true
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No metadata directory at {:?}", dir);
                false
            }
            Err(e) => {
                tracing::warn!("Ignoring failure to remove {:?}: {}", dir, e);
                false
            }
        }
    }

    /// Install-time sequence: generate the metadata, then clean it up.
    pub fn install(&self, root: &Path) -> Result<InstallReport> {
        let files_written = self.write_metadata(root)?;
        let cleaned = self.cleanup_metadata_dir(root);

        Ok(InstallReport {
            metadata_dir: self.metadata_dir(root),
            files_written,
            cleaned,
        })
    }
}
