//! depgen: generate build-system dependency configuration files from a
//! declarative project manifest.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::{Path, PathBuf};

use app::AppContext;
use app::commands::{check, generate, init, list};
use services::FilesystemArtifactStore;

pub use app::commands::check::CheckOptions;
pub use app::commands::generate::GenerateOptions;
pub use app::commands::init::InitOptions;
pub use app::commands::list::GeneratorInfo;
pub use domain::{AppError, CheckReport, CheckState, RunReport};

fn context(path: Option<&Path>) -> Result<AppContext<FilesystemArtifactStore>, AppError> {
    let root = match path {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };
    Ok(AppContext::new(FilesystemArtifactStore, root))
}

/// Write a starter `depgen.yml` manifest.
///
/// Returns the path of the written manifest.
pub fn init(path: Option<&Path>, options: InitOptions) -> Result<PathBuf, AppError> {
    let ctx = context(path)?;
    init::execute(&ctx, options)
}

/// Run the generation pipeline for a project.
///
/// Structural errors (bad settings, conflicting dependencies, bad layout)
/// abort before any file is written. Per-task failures are collected in the
/// returned report; callers decide the exit status from it.
pub fn generate(path: Option<&Path>, options: GenerateOptions) -> Result<RunReport, AppError> {
    let ctx = context(path)?;
    generate::execute(&ctx, options)
}

/// Compare on-disk artifacts against a fresh in-memory render.
pub fn check(path: Option<&Path>, options: CheckOptions) -> Result<CheckReport, AppError> {
    let ctx = context(path)?;
    check::execute(&ctx, options)
}

/// List generator families with availability for the manifest's settings.
pub fn list_generators(path: Option<&Path>) -> Result<Vec<GeneratorInfo>, AppError> {
    let ctx = context(path)?;
    list::execute(&ctx)
}
