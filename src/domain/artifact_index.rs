//! Artifact index (`manifest.toml`) emitted alongside the generated files.
//!
//! The index lists every artifact of the run with a content digest. It is an
//! output of the run like any other file; `check` uses it to spot artifacts
//! that a previous run produced but the current configuration no longer
//! would.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::AppError;
use crate::domain::layout::INDEX_FILE;

const INDEX_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactIndex {
    pub schema_version: u32,
    pub project: String,
    pub tasks: Vec<TaskRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub family: String,
    pub label: String,
    pub files: Vec<FileRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path relative to the generators root, `/`-separated.
    pub path: String,
    pub sha256: String,
}

impl ArtifactIndex {
    pub fn new(project: &str) -> Self {
        Self { schema_version: INDEX_SCHEMA_VERSION, project: project.to_string(), tasks: Vec::new() }
    }

    pub fn parse(content: &str) -> Result<Self, AppError> {
        let index: ArtifactIndex = toml::from_str(content).map_err(|e| AppError::ParseError {
            what: INDEX_FILE.to_string(),
            details: e.to_string(),
        })?;
        if index.schema_version != INDEX_SCHEMA_VERSION {
            return Err(AppError::ParseError {
                what: INDEX_FILE.to_string(),
                details: format!(
                    "unsupported schema version {} (expected {})",
                    index.schema_version, INDEX_SCHEMA_VERSION
                ),
            });
        }
        Ok(index)
    }

    pub fn to_toml(&self) -> Result<String, AppError> {
        toml::to_string_pretty(self)
            .map_err(|e| AppError::config_error(format!("Failed to serialize {}: {}", INDEX_FILE, e)))
    }

    /// All recorded artifact paths, relative to the generators root.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().flat_map(|task| task.files.iter().map(|file| file.path.as_str()))
    }
}

/// Hex SHA-256 digest of artifact content.
pub fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}
