use std::path::{Path, PathBuf};

use crate::ports::ArtifactStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ArtifactStore> {
    store: S,
    project_root: PathBuf,
}

impl<S: ArtifactStore> AppContext<S> {
    /// Create a new application context.
    pub fn new(store: S, project_root: PathBuf) -> Self {
        Self { store, project_root }
    }

    /// Get a reference to the artifact store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Root directory of the project being generated for.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}
