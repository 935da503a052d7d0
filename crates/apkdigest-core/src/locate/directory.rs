//! Locator backed by a directory of installed packages.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::PackageLocator;

/// Archive name inside a per-install package directory.
const BASE_APK: &str = "base.apk";

/// Finds packages laid out as `<root>/<app_id>.apk` or
/// `<root>/<app_id>-<suffix>/base.apk`.
#[derive(Debug, Clone)]
pub struct DirectoryLocator {
    root: PathBuf,
}

impl DirectoryLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl PackageLocator for DirectoryLocator {
    /// Candidates are sorted by path so "first" is stable across runs.
    fn candidates(&self, app_id: &str) -> Result<Vec<PathBuf>> {
        let flat_name = format!("{app_id}.apk");
        let dir_prefix = format!("{app_id}-");
        let mut found = Vec::new();

        let entries = fs::read_dir(&self.root)
            .with_context(|| format!("read package dir {}", self.root.display()))?;
        for entry in entries {
            let entry = entry.with_context(|| format!("read package dir {}", self.root.display()))?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            let path = entry.path();
            if name == flat_name && path.is_file() {
                found.push(path);
            } else if name.starts_with(&dir_prefix) && path.is_dir() {
                let apk = path.join(BASE_APK);
                if apk.is_file() {
                    found.push(apk);
                }
            }
        }

        found.sort();
        tracing::debug!(app_id, root = %self.root.display(), found = found.len(), "scanned package dir");
        Ok(found)
    }
}
