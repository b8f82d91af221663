//! Init command - writes a starter depgen.yml manifest.

use std::path::PathBuf;

use dialoguer::Input;

use crate::app::context::AppContext;
use crate::domain::{AppError, ProjectManifest};
use crate::ports::ArtifactStore;
use crate::services::templates;

/// Options for initializing a project manifest.
#[derive(Debug, Default)]
pub struct InitOptions {
    /// Project name; prompted for interactively when omitted.
    pub name: Option<String>,
    /// Overwrite an existing manifest.
    pub force: bool,
}

/// Execute the init command.
///
/// Writes a starter manifest seeded with the host platform as the target.
/// Refuses to overwrite an existing manifest unless forced.
pub fn execute<S: ArtifactStore>(
    ctx: &AppContext<S>,
    options: InitOptions,
) -> Result<PathBuf, AppError> {
    let manifest_path = ProjectManifest::path(ctx.project_root());
    if ctx.store().exists(&manifest_path) && !options.force {
        return Err(AppError::ManifestExists);
    }

    let name = match options.name {
        Some(name) => name,
        None => prompt_name(default_name(ctx))?,
    };
    if name.trim().is_empty() {
        return Err(AppError::config_error("Project name must not be empty"));
    }

    let content = templates::render(
        "scaffold/depgen.yml.j2",
        minijinja::context! {
            name => name,
            os => host_os(),
            compiler => host_compiler(),
            arch => host_arch(),
        },
    )?;

    // The starter must itself be a valid manifest.
    ProjectManifest::parse(&content)?;

    ctx.store().write_file(&manifest_path, &content)?;
    Ok(manifest_path)
}

fn default_name<S: ArtifactStore>(ctx: &AppContext<S>) -> String {
    ctx.project_root()
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "project".to_string())
}

fn prompt_name(default: String) -> Result<String, AppError> {
    Input::<String>::new()
        .with_prompt("Project name")
        .default(default)
        .interact_text()
        .map_err(|e| AppError::config_error(format!("Failed to read project name: {}", e)))
}

fn host_os() -> &'static str {
    match std::env::consts::OS {
        "windows" => "windows",
        "macos" => "macos",
        "freebsd" => "freebsd",
        _ => "linux",
    }
}

fn host_compiler() -> &'static str {
    match std::env::consts::OS {
        "windows" => "msvc",
        "macos" => "apple-clang",
        _ => "gcc",
    }
}

fn host_arch() -> &'static str {
    match std::env::consts::ARCH {
        "x86" => "x86",
        "aarch64" => "armv8",
        _ => "x86_64",
    }
}
