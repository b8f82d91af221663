//! MSBuild property-sheet generator (Windows native integration).

use crate::domain::{AppError, GeneratorFamily, Os, Settings};
use crate::ports::{Generator, RenderContext, RenderedFile};
use crate::services::templates;

pub struct MsbuildGenerator;

impl MsbuildGenerator {
    /// MSBuild property name stem for a package.
    ///
    /// Property names allow no separators, so `tau-utils` becomes `TauUtils`.
    fn property_stem(name: &str) -> String {
        name.split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let mut chars = segment.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect()
    }
}

impl Generator for MsbuildGenerator {
    fn family(&self) -> GeneratorFamily {
        GeneratorFamily::Msbuild
    }

    fn supports(&self, settings: &Settings) -> bool {
        settings.os() == Os::Windows
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<Vec<RenderedFile>, AppError> {
        let mut files = Vec::new();

        for req in ctx.requirements.iter() {
            let root = ctx.packages_root.join(&req.name);
            let content = templates::render(
                "msbuild/dep.props.j2",
                minijinja::context! {
                    name => &req.name,
                    stem => Self::property_stem(&req.name),
                    version => &req.version,
                    static_link => req.static_link,
                    configuration => &ctx.configuration,
                    root => root.to_string_lossy().replace('\\', "/"),
                },
            )?;
            files.push(RenderedFile { path: format!("{}.props", req.name), content });
        }

        let names: Vec<&str> = ctx.requirements.iter().map(|req| req.name.as_str()).collect();
        let aggregate = templates::render(
            "msbuild/deps.props.j2",
            minijinja::context! {
                deps => names,
                configuration => &ctx.configuration,
            },
        )?;
        files.push(RenderedFile { path: "deps.props".to_string(), content: aggregate });

        Ok(files)
    }
}
