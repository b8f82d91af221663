//! Check command - verifies on-disk artifacts against a fresh render.

use crate::app::context::AppContext;
use crate::app::engine::{self, TaskPlan};
use crate::domain::{
    AppError, ArtifactIndex, CheckReport, CheckState, Layout, ProjectManifest, select_tasks,
};
use crate::ports::ArtifactStore;

/// Options for a check run.
#[derive(Debug, Default)]
pub struct CheckOptions {
    pub build_type: Option<String>,
    pub profile: Option<String>,
}

/// Execute the check command.
///
/// Re-renders every task in memory and compares against the files on disk
/// without writing anything. Artifacts recorded in the index that the
/// current configuration would no longer produce are reported as orphaned.
pub fn execute<S: ArtifactStore>(
    ctx: &AppContext<S>,
    options: CheckOptions,
) -> Result<CheckReport, AppError> {
    let manifest = ProjectManifest::load(ctx.project_root())?;

    let mut settings = manifest.settings;
    if let Some(build_type) = &options.build_type {
        settings = settings.with_build_variant(build_type.parse()?);
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

    let mut report = CheckReport::default();
    let mut expected = Vec::new();

    for plan in &plans {
        // Tasks that cannot render on this target have no artifacts to check.
        let TaskPlan::Ready { dir, files, .. } = plan else { continue };
        for file in files {
            let path = dir.join(&file.path);
            let relative = engine::index_path(&layout, dir, &file.path);
            expected.push(relative.clone());

            if !ctx.store().exists(&path) {
                report.record(relative, CheckState::Missing);
            } else if ctx.store().read_file(&path)? == file.content {
                report.record(relative, CheckState::UpToDate);
            } else {
                report.record(relative, CheckState::Stale);
            }
        }
    }

    let index_path = layout.index_path();
    if ctx.store().exists(&index_path) {
        let index = ArtifactIndex::parse(&ctx.store().read_file(&index_path)?)?;
        for path in index.paths() {
            if !expected.iter().any(|e| e == path) {
                report.record(path.to_string(), CheckState::Orphaned);
            }
        }
    }

    Ok(report)
}
