//! Active build context: target os, compiler, architecture and build variant.

use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Target operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    Windows,
    Linux,
    Macos,
    FreeBsd,
}

impl Os {
    pub const ALL: [Os; 4] = [Os::Windows, Os::Linux, Os::Macos, Os::FreeBsd];

    pub fn as_str(&self) -> &'static str {
        match self {
            Os::Windows => "windows",
            Os::Linux => "linux",
            Os::Macos => "macos",
            Os::FreeBsd => "freebsd",
        }
    }
}

impl FromStr for Os {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "windows" => Ok(Os::Windows),
            "linux" => Ok(Os::Linux),
            "macos" => Ok(Os::Macos),
            "freebsd" => Ok(Os::FreeBsd),
            _ => Err(AppError::InvalidSetting {
                field: "os",
                value: value.to_string(),
                allowed: "windows, linux, macos, freebsd",
            }),
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Target compiler toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compiler {
    Msvc,
    Gcc,
    Clang,
    AppleClang,
}

impl Compiler {
    pub fn as_str(&self) -> &'static str {
        match self {
            Compiler::Msvc => "msvc",
            Compiler::Gcc => "gcc",
            Compiler::Clang => "clang",
            Compiler::AppleClang => "apple-clang",
        }
    }
}

impl FromStr for Compiler {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "msvc" => Ok(Compiler::Msvc),
            "gcc" => Ok(Compiler::Gcc),
            "clang" => Ok(Compiler::Clang),
            "apple-clang" => Ok(Compiler::AppleClang),
            _ => Err(AppError::InvalidSetting {
                field: "compiler",
                value: value.to_string(),
                allowed: "msvc, gcc, clang, apple-clang",
            }),
        }
    }
}

impl fmt::Display for Compiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Target processor architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    X86_64,
    X86,
    Armv8,
}

impl Arch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::X86_64 => "x86_64",
            Arch::X86 => "x86",
            Arch::Armv8 => "armv8",
        }
    }
}

impl FromStr for Arch {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "x86_64" | "amd64" => Ok(Arch::X86_64),
            "x86" => Ok(Arch::X86),
            "armv8" | "aarch64" => Ok(Arch::Armv8),
            _ => Err(AppError::InvalidSetting {
                field: "arch",
                value: value.to_string(),
                allowed: "x86_64, x86, armv8",
            }),
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Named build configuration variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildVariant {
    Debug,
    Release,
    RelWithDebInfo,
    MinSizeRel,
}

impl BuildVariant {
    pub const ALL: [BuildVariant; 4] = [
        BuildVariant::Debug,
        BuildVariant::Release,
        BuildVariant::RelWithDebInfo,
        BuildVariant::MinSizeRel,
    ];

    /// Canonical configuration name as downstream build systems spell it.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildVariant::Debug => "Debug",
            BuildVariant::Release => "Release",
            BuildVariant::RelWithDebInfo => "RelWithDebInfo",
            BuildVariant::MinSizeRel => "MinSizeRel",
        }
    }
}

impl FromStr for BuildVariant {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "debug" => Ok(BuildVariant::Debug),
            "release" => Ok(BuildVariant::Release),
            "relwithdebinfo" => Ok(BuildVariant::RelWithDebInfo),
            "minsizerel" => Ok(BuildVariant::MinSizeRel),
            _ => Err(AppError::InvalidBuildVariant(value.to_string())),
        }
    }
}

impl fmt::Display for BuildVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The active build context for one generation run.
///
/// Built once from the manifest (plus CLI overrides) and passed explicitly
/// into every component so the engine stays testable with synthetic values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    os: Os,
    compiler: Compiler,
    arch: Arch,
    build_variant: BuildVariant,
}

impl Settings {
    pub fn new(os: Os, compiler: Compiler, arch: Arch, build_variant: BuildVariant) -> Self {
        Self { os, compiler, arch, build_variant }
    }

    /// Parse from the raw string fields of a manifest settings block.
    pub fn parse(os: &str, compiler: &str, arch: &str, build_type: &str) -> Result<Self, AppError> {
        Ok(Self {
            os: os.parse()?,
            compiler: compiler.parse()?,
            arch: arch.parse()?,
            build_variant: build_type.parse()?,
        })
    }

    pub fn os(&self) -> Os {
        self.os
    }

    pub fn compiler(&self) -> Compiler {
        self.compiler
    }

    pub fn arch(&self) -> Arch {
        self.arch
    }

    pub fn build_variant(&self) -> BuildVariant {
        self.build_variant
    }

    /// Replace the build variant, keeping the rest of the context.
    pub fn with_build_variant(self, build_variant: BuildVariant) -> Self {
        Self { build_variant, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_canonical_values() {
        let settings = Settings::parse("windows", "msvc", "x86_64", "Debug").unwrap();
        assert_eq!(settings.os(), Os::Windows);
        assert_eq!(settings.compiler(), Compiler::Msvc);
        assert_eq!(settings.arch(), Arch::X86_64);
        assert_eq!(settings.build_variant(), BuildVariant::Debug);
    }

    #[test]
    fn parse_is_case_insensitive() {
        let settings = Settings::parse("Linux", "GCC", "AMD64", "release").unwrap();
        assert_eq!(settings.os(), Os::Linux);
        assert_eq!(settings.arch(), Arch::X86_64);
        assert_eq!(settings.build_variant(), BuildVariant::Release);
    }

    #[test]
    fn unknown_build_variant_is_rejected() {
        let err = Settings::parse("linux", "gcc", "x86_64", "Profiling").unwrap_err();
        assert!(matches!(err, AppError::InvalidBuildVariant(value) if value == "Profiling"));
    }

    #[test]
    fn unknown_os_is_rejected() {
        let err = Settings::parse("beos", "gcc", "x86_64", "Debug").unwrap_err();
        assert!(matches!(err, AppError::InvalidSetting { field: "os", .. }));
    }

    #[test]
    fn variant_names_match_downstream_spelling() {
        for variant in BuildVariant::ALL {
            assert_eq!(variant.as_str().parse::<BuildVariant>().unwrap(), variant);
        }
    }

    #[test]
    fn with_build_variant_keeps_other_fields() {
        let settings = Settings::parse("windows", "msvc", "x86_64", "Debug").unwrap();
        let release = settings.with_build_variant(BuildVariant::Release);
        assert_eq!(release.os(), Os::Windows);
        assert_eq!(release.build_variant(), BuildVariant::Release);
    }
}
