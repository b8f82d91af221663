//! pkg-config file generator (unix native integration).

use crate::domain::{AppError, GeneratorFamily, Os, Settings};
use crate::ports::{Generator, RenderContext, RenderedFile};
use crate::services::templates;

pub struct PkgConfigGenerator;

impl Generator for PkgConfigGenerator {
    fn family(&self) -> GeneratorFamily {
        GeneratorFamily::PkgConfig
    }

    fn supports(&self, settings: &Settings) -> bool {
        matches!(settings.os(), Os::Linux | Os::Macos | Os::FreeBsd)
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<Vec<RenderedFile>, AppError> {
        let mut files = Vec::new();

        for req in ctx.requirements.iter() {
            let root = ctx.packages_root.join(&req.name);
            let content = templates::render(
                "pkgconfig/dep.pc.j2",
                minijinja::context! {
                    project => ctx.project,
                    name => &req.name,
                    version => &req.version,
                    static_link => req.static_link,
                    configuration => &ctx.configuration,
                    configuration_dir => ctx.configuration.to_lowercase(),
                    root => root.to_string_lossy().replace('\\', "/"),
                },
            )?;
            files.push(RenderedFile { path: format!("{}.pc", req.name), content });
        }

        Ok(files)
    }
}
