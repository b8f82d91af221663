//! Declared external package requirements.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// One declared external package requirement.
///
/// This struct doubles as the YAML schema for `requires:` entries in the
/// manifest. The constraint string is owned by the external package manager;
/// depgen only validates that it is present and passes it through.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DependencyRequirement {
    /// Package name, unique within a manifest.
    pub name: String,
    /// Version constraint (e.g. `^1.3.10`).
    pub version: String,
    /// Force static linkage for this dependency.
    #[serde(default, rename = "static")]
    pub static_link: bool,
}

impl DependencyRequirement {
    pub fn new(name: &str, version: &str) -> Self {
        Self { name: name.to_string(), version: version.to_string(), static_link: false }
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.name.is_empty() {
            return Err(AppError::InvalidRequirement {
                name: "<unnamed>".to_string(),
                reason: "name must not be empty".to_string(),
            });
        }
        let valid_name = self
            .name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');
        if !valid_name {
            return Err(AppError::InvalidRequirement {
                name: self.name.clone(),
                reason: "name must be alphanumeric with hyphens, underscores, or periods"
                    .to_string(),
            });
        }
        if self.version.trim().is_empty() {
            return Err(AppError::InvalidRequirement {
                name: self.name.clone(),
                reason: "version constraint must not be empty".to_string(),
            });
        }
        Ok(())
    }

    fn describe(&self) -> String {
        if self.static_link {
            format!("{} static", self.version)
        } else {
            self.version.clone()
        }
    }
}

/// Ordered set of dependency requirements, unique by package name.
///
/// Declaration order is preserved; generated artifacts iterate it as-is so
/// output stays byte-identical across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementSet {
    entries: Vec<DependencyRequirement>,
}

impl RequirementSet {
    /// Build the set from declared entries.
    ///
    /// Exact duplicate declarations coalesce; a re-declaration with a
    /// different constraint or flags fails.
    pub fn from_entries(entries: Vec<DependencyRequirement>) -> Result<Self, AppError> {
        let mut set = RequirementSet::default();
        for entry in entries {
            entry.validate()?;
            match set.entries.iter().find(|existing| existing.name == entry.name) {
                Some(existing) if *existing == entry => {}
                Some(existing) => {
                    return Err(AppError::DuplicateDependency {
                        name: entry.name.clone(),
                        first: existing.describe(),
                        second: entry.describe(),
                    });
                }
                None => set.entries.push(entry),
            }
        }
        Ok(set)
    }

    /// Adjust the static-linkage flag of a declared dependency.
    ///
    /// Callers use this between manifest load and generation (the CLI maps
    /// `--force-static` onto it).
    pub fn set_static(&mut self, name: &str, static_link: bool) -> Result<(), AppError> {
        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => {
                entry.static_link = static_link;
                Ok(())
            }
            None => Err(AppError::UnknownDependency(name.to_string())),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &DependencyRequirement> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
