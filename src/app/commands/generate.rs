//! Gen command - runs the generation pipeline for a project.

use crate::app::context::AppContext;
use crate::app::engine;
use crate::domain::{AppError, Layout, ProjectManifest, RunReport, select_tasks};
use crate::ports::ArtifactStore;

/// Options for a generation run.
#[derive(Debug, Default)]
pub struct GenerateOptions {
    /// Override the manifest build type.
    pub build_type: Option<String>,
    /// Profile to activate (defaults to the manifest's `default` preset).
    pub profile: Option<String>,
    /// Dependencies to force static linkage for, before generation.
    pub force_static: Vec<String>,
}

/// Execute the gen command.
///
/// Loads `depgen.yml`, validates settings and dependencies, selects the
/// generator tasks and writes their artifacts. Structural problems abort
/// before any file is written; per-task failures are collected in the
/// returned report.
pub fn execute<S: ArtifactStore>(
    ctx: &AppContext<S>,
    options: GenerateOptions,
) -> Result<RunReport, AppError> {
    let mut manifest = ProjectManifest::load(ctx.project_root())?;

    let mut settings = manifest.settings;
    if let Some(build_type) = &options.build_type {
        settings = settings.with_build_variant(build_type.parse()?);
    }

    for name in &options.force_static {
        manifest.requirements.set_static(name, true)?;
    }

    let profile = manifest.profile(options.profile.as_deref())?;
    let layout = Layout::resolve(
        ctx.project_root(),
        settings.os(),
        manifest.layout.folder.as_deref(),
        manifest.layout.packages_folder.as_deref(),
    )?;

    let tasks = select_tasks(&settings, &profile, &manifest.debug_label);
    let plans = engine::plan_tasks(&manifest, &settings, &layout, &tasks);
    engine::run(ctx.store(), &manifest, &layout, plans)
}
