//! List command - shows generator families and their availability.

use serde::Serialize;

use crate::app::context::AppContext;
use crate::domain::{AppError, GeneratorFamily, ProjectManifest};
use crate::ports::ArtifactStore;
use crate::services::generator_for;

/// One generator family as seen from the manifest's settings.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratorInfo {
    pub family: String,
    pub role: &'static str,
    pub available: bool,
}

/// Execute the list command.
pub fn execute<S: ArtifactStore>(ctx: &AppContext<S>) -> Result<Vec<GeneratorInfo>, AppError> {
    let manifest = ProjectManifest::load(ctx.project_root())?;
    let settings = manifest.settings;
    let primary = GeneratorFamily::native_for(settings.os());

    Ok(GeneratorFamily::ALL
        .iter()
        .map(|&family| GeneratorInfo {
            family: family.to_string(),
            role: if family == primary {
                "primary"
            } else if family == GeneratorFamily::CmakeToolchain {
                "companion"
            } else {
                "secondary"
            },
            available: generator_for(family).supports(&settings),
        })
        .collect())
}
