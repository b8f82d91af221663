//! CMake dependency-description generator (cross-platform meta-build).

use crate::domain::{AppError, GeneratorFamily, Settings};
use crate::ports::{Generator, RenderContext, RenderedFile};
use crate::services::templates;

pub struct CmakeGenerator;

impl CmakeGenerator {
    /// CMake variable prefix for a package (`tau-utils` becomes `TAU_UTILS`).
    fn variable_prefix(name: &str) -> String {
        name.chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
            .collect()
    }
}

impl Generator for CmakeGenerator {
    fn family(&self) -> GeneratorFamily {
        GeneratorFamily::Cmake
    }

    fn supports(&self, _settings: &Settings) -> bool {
        true
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<Vec<RenderedFile>, AppError> {
        let mut files = Vec::new();

        for req in ctx.requirements.iter() {
            let root = ctx.packages_root.join(&req.name);
            let content = templates::render(
                "cmake/dep-config.cmake.j2",
                minijinja::context! {
                    project => ctx.project,
                    name => &req.name,
                    var => Self::variable_prefix(&req.name),
                    version => &req.version,
                    static_link => req.static_link,
                    configuration => &ctx.configuration,
                    root => root.to_string_lossy().replace('\\', "/"),
                },
            )?;
            files.push(RenderedFile { path: format!("{}-config.cmake", req.name), content });
        }

        let names: Vec<&str> = ctx.requirements.iter().map(|req| req.name.as_str()).collect();
        let aggregate = templates::render(
            "cmake/deps.cmake.j2",
            minijinja::context! {
                project => ctx.project,
                deps => names,
                configuration => &ctx.configuration,
                registry => ctx.registry.map(|url| url.as_str()),
            },
        )?;
        files.push(RenderedFile { path: "deps.cmake".to_string(), content: aggregate });

        Ok(files)
    }
}
