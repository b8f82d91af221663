use std::path::Path;

use crate::domain::AppError;

/// Port for writing generated artifacts.
///
/// Implementations must make each write atomic: a failed write may not leave
/// a partial file at the target path.
pub trait ArtifactStore {
    /// Write `content` to `path`, creating parent directories as needed.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Read a file back as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Whether a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a file if present. Used to clear a failed task's partial output.
    fn remove_file(&self, path: &Path) -> Result<(), AppError>;
}
