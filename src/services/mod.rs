mod cmake;
mod filesystem_store;
mod msbuild;
mod pkg_config;
pub mod templates;
mod toolchain;

pub use cmake::CmakeGenerator;
pub use filesystem_store::FilesystemArtifactStore;
pub use msbuild::MsbuildGenerator;
pub use pkg_config::PkgConfigGenerator;
pub use toolchain::ToolchainGenerator;

use crate::domain::GeneratorFamily;
use crate::ports::Generator;

/// Look up the generator serving a family.
pub fn generator_for(family: GeneratorFamily) -> Box<dyn Generator> {
    match family {
        GeneratorFamily::Msbuild => Box::new(MsbuildGenerator),
        GeneratorFamily::PkgConfig => Box::new(PkgConfigGenerator),
        GeneratorFamily::Cmake => Box::new(CmakeGenerator),
        GeneratorFamily::CmakeToolchain => Box::new(ToolchainGenerator),
    }
}
