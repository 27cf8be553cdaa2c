//! Throwaway copies of IaC directories
//!
//! Real runs never touch the repository: the IaC directory is mirrored into a
//! fresh temp dir which is removed when the [`Scratch`] is dropped.

use crate::error::AdapterError;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Entries never copied into a scratch workspace
const SKIPPED: [&str; 3] = [".terraform", ".git", "terraform.tfstate"];

/// Temporary mirror of an IaC directory
#[derive(Debug)]
pub struct Scratch {
    _dir: TempDir,
    root: PathBuf,
}

impl Scratch {
    /// Mirror `source` into `<tmp>/<subdir>` under a temp dir named `prefix*`
    pub fn mirror(source: &Path, prefix: &str, subdir: &str) -> Result<Self, AdapterError> {
        let dir = tempfile::Builder::new()
            .prefix(prefix)
            .tempdir()
            .map_err(|e| AdapterError::io_error(std::env::temp_dir(), e))?;
        let root = dir.path().join(subdir);
        std::fs::create_dir_all(&root).map_err(|e| AdapterError::io_error(&root, e))?;

        for entry in WalkDir::new(source).into_iter().filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            !SKIPPED.contains(&name.as_ref())
        }) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(source) else {
                continue;
            };
            let dest = root.join(relative);
            if let Some(parent) = dest.parent() {
                std::fs::create_dir_all(parent).map_err(|e| AdapterError::io_error(parent, e))?;
            }
            std::fs::copy(entry.path(), &dest).map_err(|e| AdapterError::io_error(&dest, e))?;
        }

        Ok(Self { _dir: dir, root })
    }

    /// Working directory inside the mirror
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write a file relative to the mirror root
    pub fn write(&self, relative: &str, contents: &str) -> Result<PathBuf, AdapterError> {
        let path = self.root.join(relative);
        std::fs::write(&path, contents).map_err(|e| AdapterError::io_error(&path, e))?;
        Ok(path)
    }
}
