//! CMake toolchain-description generator, companion to the cmake family.

use crate::domain::{AppError, Arch, Compiler, GeneratorFamily, Os, Settings};
use crate::ports::{Generator, RenderContext, RenderedFile};
use crate::services::templates;

pub struct ToolchainGenerator;

fn system_name(os: Os) -> &'static str {
    match os {
        Os::Windows => "Windows",
        Os::Linux => "Linux",
        Os::Macos => "Darwin",
        Os::FreeBsd => "FreeBSD",
    }
}

fn processor(arch: Arch) -> &'static str {
    match arch {
        Arch::X86_64 => "x86_64",
        Arch::X86 => "i686",
        Arch::Armv8 => "aarch64",
    }
}

fn compilers(compiler: Compiler) -> (&'static str, &'static str) {
    match compiler {
        Compiler::Msvc => ("cl", "cl"),
        Compiler::Gcc => ("gcc", "g++"),
        Compiler::Clang | Compiler::AppleClang => ("clang", "clang++"),
    }
}

impl Generator for ToolchainGenerator {
    fn family(&self) -> GeneratorFamily {
        GeneratorFamily::CmakeToolchain
    }

    fn supports(&self, _settings: &Settings) -> bool {
        true
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<Vec<RenderedFile>, AppError> {
        let (c_compiler, cxx_compiler) = compilers(ctx.settings.compiler());
        // MSVC links the static runtime when any dependency asks for static
        // linkage, matching what the dependency sheets declare.
        let static_runtime = ctx.settings.compiler() == Compiler::Msvc
            && ctx.requirements.iter().any(|req| req.static_link);

        let content = templates::render(
            "cmake/toolchain.cmake.j2",
            minijinja::context! {
                project => ctx.project,
                system_name => system_name(ctx.settings.os()),
                processor => processor(ctx.settings.arch()),
                build_type => ctx.settings.build_variant().as_str(),
                c_compiler => c_compiler,
                cxx_compiler => cxx_compiler,
                static_runtime => static_runtime,
                packages_root => ctx.packages_root.to_string_lossy().replace('\\', "/"),
            },
        )?;

        Ok(vec![RenderedFile { path: "toolchain.cmake".to_string(), content }])
    }
}
