//! Generator invocation engine: renders every scheduled task, then writes.
//!
//! Per-task failures are collected into the run report so one bad generator
//! does not hide the rest; a task marked required aborts the run instead.

use std::path::{Path, PathBuf};

use crate::domain::{
    AppError, ArtifactIndex, FileRecord, Layout, ProjectManifest, RunReport, Settings, TaskRecord,
    TaskSpec, hash_content,
};
use crate::ports::{ArtifactStore, RenderContext, RenderedFile};
use crate::services::generator_for;

/// One scheduled task after the render phase.
#[derive(Debug)]
pub enum TaskPlan {
    /// Rendered and ready to write.
    Ready { spec: TaskSpec, dir: PathBuf, files: Vec<RenderedFile> },
    /// Could not render; carried into the report (or aborts if required).
    Failed { spec: TaskSpec, error: AppError },
}

/// Render every scheduled task against the resolved inputs.
///
/// Rendering never touches the filesystem, so a run that fails here leaves
/// no artifacts behind.
pub fn plan_tasks(
    manifest: &ProjectManifest,
    settings: &Settings,
    layout: &Layout,
    tasks: &[TaskSpec],
) -> Vec<TaskPlan> {
    tasks
        .iter()
        .map(|spec| {
            let generator = generator_for(spec.family);
            if !generator.supports(settings) {
                return TaskPlan::Failed {
                    spec: spec.clone(),
                    error: AppError::GeneratorUnavailable {
                        family: spec.family.to_string(),
                        os: settings.os().to_string(),
                    },
                };
            }

            let ctx = RenderContext {
                project: &manifest.project,
                settings,
                requirements: &manifest.requirements,
                registry: manifest.registry.as_ref(),
                packages_root: layout.packages_root().to_path_buf(),
                configuration: RenderContext::configuration_for(settings, &spec.label),
            };

            match generator.render(&ctx) {
                Ok(files) => {
                    TaskPlan::Ready { spec: spec.clone(), dir: layout.task_dir(spec), files }
                }
                Err(error) => TaskPlan::Failed { spec: spec.clone(), error },
            }
        })
        .collect()
}

/// Write every planned task and emit the artifact index.
pub fn run(
    store: &impl ArtifactStore,
    manifest: &ProjectManifest,
    layout: &Layout,
    plans: Vec<TaskPlan>,
) -> Result<RunReport, AppError> {
    let mut report = RunReport::default();
    let mut index = ArtifactIndex::new(&manifest.project);

    for plan in plans {
        match plan {
            TaskPlan::Failed { spec, error } => {
                if spec.required {
                    return Err(error);
                }
                report.record_failure(&spec, error);
            }
            TaskPlan::Ready { spec, dir, files } => {
                match write_task(store, &dir, &files) {
                    Ok(written) => {
                        index.tasks.push(task_record(layout, &spec, &dir, &files));
                        report.record_success(&spec, written);
                    }
                    Err(error) => {
                        if spec.required {
                            return Err(error);
                        }
                        report.record_failure(&spec, error);
                    }
                }
            }
        }
    }

    let index_content = index.to_toml()?;
    store.write_file(&layout.index_path(), &index_content)?;

    Ok(report)
}

/// Write one task's files; on failure, clear what was already written so no
/// partial task output remains.
fn write_task(
    store: &impl ArtifactStore,
    dir: &Path,
    files: &[RenderedFile],
) -> Result<Vec<PathBuf>, AppError> {
    let mut written: Vec<PathBuf> = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(&file.path);
        if let Err(error) = store.write_file(&path, &file.content) {
            for earlier in &written {
                let _ = store.remove_file(earlier);
            }
            return Err(error);
        }
        written.push(path);
    }
    Ok(written)
}

fn task_record(layout: &Layout, spec: &TaskSpec, dir: &Path, files: &[RenderedFile]) -> TaskRecord {
    let files = files
        .iter()
        .map(|file| FileRecord {
            path: index_path(layout, dir, &file.path),
            sha256: hash_content(&file.content),
        })
        .collect();
    TaskRecord { family: spec.family.to_string(), label: spec.label.dir_name(), files }
}

/// Index paths are relative to the generators root, `/`-separated.
pub fn index_path(layout: &Layout, dir: &Path, file: &str) -> String {
    let absolute = dir.join(file);
    let relative = absolute.strip_prefix(layout.root()).unwrap_or(&absolute);
    relative.to_string_lossy().replace('\\', "/")
}
