use std::path::PathBuf;

use url::Url;

use crate::domain::{AppError, ConfigLabel, GeneratorFamily, RequirementSet, Settings};

/// A file produced by a generator, before it reaches disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Path relative to the task's output directory.
    pub path: String,
    /// File content as UTF-8 text.
    pub content: String,
}

/// Everything a generator may consult while rendering one task.
///
/// Passed explicitly so generators stay pure over their inputs and the same
/// context re-renders to byte-identical output.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub project: &'a str,
    pub settings: &'a Settings,
    pub requirements: &'a RequirementSet,
    pub registry: Option<&'a Url>,
    /// Install root of the external package manager.
    pub packages_root: PathBuf,
    /// Effective configuration name for this invocation: the build variant
    /// for the default label, or the label's own name.
    pub configuration: String,
}

impl RenderContext<'_> {
    /// Effective configuration name for a label under these settings.
    pub fn configuration_for(settings: &Settings, label: &ConfigLabel) -> String {
        match label {
            ConfigLabel::Default => settings.build_variant().as_str().to_string(),
            ConfigLabel::Named(name) => name.clone(),
        }
    }
}

/// Port for build-system-specific configuration emitters.
pub trait Generator {
    /// The family this generator serves.
    fn family(&self) -> GeneratorFamily;

    /// Whether this generator can produce output for the configured target.
    ///
    /// Judged against the manifest settings, not the host, so cross-target
    /// manifests generate anywhere.
    fn supports(&self, settings: &Settings) -> bool;

    /// Render every artifact of one invocation.
    fn render(&self, ctx: &RenderContext<'_>) -> Result<Vec<RenderedFile>, AppError>;
}
