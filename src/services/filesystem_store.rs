//! Filesystem-backed artifact store with atomic writes.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// Writes artifacts via a sibling temp file and rename, so a failed write
/// never leaves partial content at the target path.
pub struct FilesystemArtifactStore;

impl FilesystemArtifactStore {
    fn temp_path(path: &Path) -> PathBuf {
        let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        path.with_file_name(name)
    }
}

impl ArtifactStore for FilesystemArtifactStore {
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let temp = Self::temp_path(path);
        fs::write(&temp, content)?;
        if let Err(err) = fs::rename(&temp, path) {
            let _ = fs::remove_file(&temp);
            return Err(err.into());
        }
        Ok(())
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        Ok(fs::read_to_string(path)?)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_file(&self, path: &Path) -> Result<(), AppError> {
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
