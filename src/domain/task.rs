//! Generator families and the per-run task descriptions fed to the engine.

use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;
use crate::domain::settings::Os;

/// The build-system integrations depgen can emit configuration for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeneratorFamily {
    /// MSBuild property sheets (Windows native integration).
    Msbuild,
    /// pkg-config `.pc` files (unix native integration).
    PkgConfig,
    /// CMake dependency description files.
    Cmake,
    /// CMake toolchain description, companion to [`GeneratorFamily::Cmake`].
    CmakeToolchain,
}

impl GeneratorFamily {
    pub const ALL: [GeneratorFamily; 4] = [
        GeneratorFamily::Msbuild,
        GeneratorFamily::PkgConfig,
        GeneratorFamily::Cmake,
        GeneratorFamily::CmakeToolchain,
    ];

    /// Directory segment reserved for this family under the generators root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            GeneratorFamily::Msbuild => "msbuild",
            GeneratorFamily::PkgConfig => "pkgconfig",
            GeneratorFamily::Cmake => "cmake",
            GeneratorFamily::CmakeToolchain => "toolchain",
        }
    }

    /// The platform-native primary family for a target os.
    pub fn native_for(os: Os) -> GeneratorFamily {
        match os {
            Os::Windows => GeneratorFamily::Msbuild,
            Os::Linux | Os::Macos | Os::FreeBsd => GeneratorFamily::PkgConfig,
        }
    }
}

impl FromStr for GeneratorFamily {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "msbuild" => Ok(GeneratorFamily::Msbuild),
            "pkgconfig" | "pkg-config" => Ok(GeneratorFamily::PkgConfig),
            "cmake" => Ok(GeneratorFamily::Cmake),
            "toolchain" => Ok(GeneratorFamily::CmakeToolchain),
            _ => Err(AppError::UnknownGeneratorFamily(value.to_string())),
        }
    }
}

impl fmt::Display for GeneratorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// Configuration label for one generator invocation.
///
/// `Default` follows the active build variant; a named label produces the
/// variant-specific sibling output (the debug-only invocation).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConfigLabel {
    Default,
    Named(String),
}

/// Directory names a label may never take: family output folders plus the
/// default label folder and the artifact index file.
const RESERVED_DIRS: [&str; 6] =
    ["msbuild", "pkgconfig", "cmake", "toolchain", "default", "manifest.toml"];

impl ConfigLabel {
    /// Validate and build a named label.
    pub fn named(label: &str) -> Result<ConfigLabel, AppError> {
        if label.is_empty() {
            return Err(AppError::InvalidLabel {
                label: label.to_string(),
                reason: "label must not be empty".to_string(),
            });
        }
        let valid =
            label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(AppError::InvalidLabel {
                label: label.to_string(),
                reason: "label must be alphanumeric with hyphens or underscores".to_string(),
            });
        }
        let dir = label.to_lowercase();
        if RESERVED_DIRS.contains(&dir.as_str()) {
            return Err(AppError::InvalidLabel {
                label: label.to_string(),
                reason: format!("'{}' is reserved for generator output", dir),
            });
        }
        Ok(ConfigLabel::Named(label.to_string()))
    }

    /// Directory segment for this label under the generators root.
    pub fn dir_name(&self) -> String {
        match self {
            ConfigLabel::Default => "default".to_string(),
            ConfigLabel::Named(label) => label.to_lowercase(),
        }
    }
}

impl fmt::Display for ConfigLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigLabel::Default => write!(f, "default"),
            ConfigLabel::Named(label) => write!(f, "{}", label),
        }
    }
}

/// One scheduled generator invocation.
///
/// Constructed by the selector, consumed by the engine, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSpec {
    pub family: GeneratorFamily,
    pub label: ConfigLabel,
    /// A required task's failure aborts the remainder of the run instead of
    /// being collected.
    pub required: bool,
}

impl TaskSpec {
    pub fn new(family: GeneratorFamily, label: ConfigLabel) -> Self {
        Self { family, label, required: false }
    }

    pub fn required(family: GeneratorFamily, label: ConfigLabel) -> Self {
        Self { family, label, required: true }
    }
}

impl fmt::Display for TaskSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.family, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_dir_names_roundtrip() {
        for family in GeneratorFamily::ALL {
            assert_eq!(family.dir_name().parse::<GeneratorFamily>().unwrap(), family);
        }
    }

    #[test]
    fn native_family_per_os() {
        assert_eq!(GeneratorFamily::native_for(Os::Windows), GeneratorFamily::Msbuild);
        assert_eq!(GeneratorFamily::native_for(Os::Linux), GeneratorFamily::PkgConfig);
        assert_eq!(GeneratorFamily::native_for(Os::Macos), GeneratorFamily::PkgConfig);
    }

    #[test]
    fn named_label_lowercases_directory() {
        let label = ConfigLabel::named("TestSetup").unwrap();
        assert_eq!(label.dir_name(), "testsetup");
        assert_eq!(label.to_string(), "TestSetup");
    }

    #[test]
    fn reserved_label_names_are_rejected() {
        for reserved in ["cmake", "Toolchain", "default", "msbuild"] {
            let err = ConfigLabel::named(reserved).unwrap_err();
            assert!(matches!(err, AppError::InvalidLabel { .. }), "{} should be reserved", reserved);
        }
    }

    #[test]
    fn empty_and_malformed_labels_are_rejected() {
        assert!(ConfigLabel::named("").is_err());
        assert!(ConfigLabel::named("has space").is_err());
        assert!(ConfigLabel::named("has/slash").is_err());
    }
}
