//! Output layout: where generated artifacts land relative to the project root.

use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;
use crate::domain::settings::Os;
use crate::domain::task::{GeneratorFamily, TaskSpec};

/// Default folder for generated artifacts, relative to the project root.
pub const DEFAULT_GENERATORS_DIR: &str = "generators";

/// Default folder the external package manager installs packages into.
pub const DEFAULT_PACKAGES_DIR: &str = ".depgen/packages";

/// Artifact index file written at the generators root.
pub const INDEX_FILE: &str = "manifest.toml";

/// Resolved output layout for one generation run.
///
/// Primary-family tasks write to `<root>/<label>/`; every other family owns
/// `<root>/<family>/`. Labels are validated against the family folder names
/// when constructed, so task output paths are disjoint by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
    packages_root: PathBuf,
    primary: GeneratorFamily,
}

impl Layout {
    /// Resolve the layout from the project root and optional overrides.
    pub fn resolve(
        project_root: &Path,
        os: Os,
        folder: Option<&str>,
        packages_folder: Option<&str>,
    ) -> Result<Self, AppError> {
        let folder = match folder {
            Some(value) => {
                validate_override(value)?;
                value
            }
            None => DEFAULT_GENERATORS_DIR,
        };

        let packages = match packages_folder {
            Some(value) => {
                if value.trim().is_empty() {
                    return Err(AppError::InvalidLayout {
                        value: value.to_string(),
                        reason: "packages folder must not be empty".to_string(),
                    });
                }
                value
            }
            None => DEFAULT_PACKAGES_DIR,
        };

        let packages_path = Path::new(packages);
        let packages_root = if packages_path.is_absolute() {
            packages_path.to_path_buf()
        } else {
            project_root.join(packages_path)
        };

        Ok(Self {
            root: project_root.join(folder),
            packages_root,
            primary: GeneratorFamily::native_for(os),
        })
    }

    /// Root directory all generated artifacts live under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory the external package manager installs packages into.
    pub fn packages_root(&self) -> &Path {
        &self.packages_root
    }

    /// The platform-native primary generator family for this run.
    pub fn primary_family(&self) -> GeneratorFamily {
        self.primary
    }

    /// Output directory for one scheduled task.
    pub fn task_dir(&self, task: &TaskSpec) -> PathBuf {
        if task.family == self.primary {
            self.root.join(task.label.dir_name())
        } else {
            self.root.join(task.family.dir_name())
        }
    }

    /// Path of the artifact index emitted alongside the generated files.
    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    /// Install directory of one resolved package.
    pub fn package_dir(&self, name: &str) -> PathBuf {
        self.packages_root.join(name)
    }
}

/// An override must be an explicit relative path staying inside the project.
fn validate_override(value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidLayout {
            value: value.to_string(),
            reason: "folder must not be empty".to_string(),
        });
    }
    let path = Path::new(value);
    if path.is_absolute() {
        return Err(AppError::InvalidLayout {
            value: value.to_string(),
            reason: "folder must be a relative path".to_string(),
        });
    }
    for component in path.components() {
        match component {
            Component::Normal(_) => {}
            _ => {
                return Err(AppError::InvalidLayout {
                    value: value.to_string(),
                    reason: "folder must not traverse outside the project".to_string(),
                });
            }
        }
    }
    Ok(())
}
