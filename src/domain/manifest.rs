//! Project manifest (`depgen.yml`) model, parsing and validation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::domain::AppError;
use crate::domain::requirement::{DependencyRequirement, RequirementSet};
use crate::domain::settings::Settings;
use crate::domain::task::{ConfigLabel, GeneratorFamily};

/// The project manifest file name.
pub const MANIFEST_FILE: &str = "depgen.yml";

/// Alternate configuration label scheduled for debug builds when the
/// manifest does not override it.
pub const DEFAULT_DEBUG_LABEL: &str = "TestSetup";

/// Raw YAML schema. Validation happens in [`ProjectManifest::from_raw`].
#[derive(Debug, Deserialize)]
struct RawManifest {
    project: String,
    #[serde(default)]
    registry: Option<Url>,
    settings: RawSettings,
    #[serde(default)]
    requires: Vec<DependencyRequirement>,
    #[serde(default)]
    profiles: BTreeMap<String, RawProfile>,
    #[serde(default)]
    layout: RawLayout,
    #[serde(default)]
    debug_configuration: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSettings {
    os: String,
    compiler: String,
    arch: String,
    build_type: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawLayout {
    #[serde(default)]
    folder: Option<String>,
    #[serde(default)]
    packages_folder: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawProfile {
    #[serde(default)]
    generators: Vec<RawGeneratorEntry>,
}

/// A profile entry is either a bare family name or a mapping with flags.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawGeneratorEntry {
    Family(String),
    Detailed {
        family: String,
        #[serde(default)]
        required: bool,
    },
}

/// One enabled generator family inside a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileGenerator {
    pub family: GeneratorFamily,
    pub required: bool,
}

/// A named preset of enabled generator families.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub generators: Vec<ProfileGenerator>,
}

/// Output layout configuration carried by the manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutConfig {
    pub folder: Option<String>,
    pub packages_folder: Option<String>,
}

/// Validated project declaration, immutable for the duration of one run.
#[derive(Debug, Clone)]
pub struct ProjectManifest {
    pub project: String,
    pub registry: Option<Url>,
    pub settings: Settings,
    pub requirements: RequirementSet,
    pub layout: LayoutConfig,
    pub debug_label: ConfigLabel,
    profiles: BTreeMap<String, Profile>,
}

impl ProjectManifest {
    /// Load and validate the manifest for a project root.
    pub fn load(project_root: &Path) -> Result<Self, AppError> {
        let path = Self::path(project_root);
        if !path.exists() {
            return Err(AppError::ManifestMissing);
        }
        let content = std::fs::read_to_string(&path)?;
        Self::parse(&content)
    }

    /// Manifest path for a project root.
    pub fn path(project_root: &Path) -> PathBuf {
        project_root.join(MANIFEST_FILE)
    }

    /// Parse and validate manifest content.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let raw: RawManifest = serde_yaml::from_str(content).map_err(|e| AppError::ParseError {
            what: MANIFEST_FILE.to_string(),
            details: e.to_string(),
        })?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawManifest) -> Result<Self, AppError> {
        if raw.project.trim().is_empty() {
            return Err(AppError::config_error("Project name must not be empty"));
        }

        let settings = Settings::parse(
            &raw.settings.os,
            &raw.settings.compiler,
            &raw.settings.arch,
            &raw.settings.build_type,
        )?;

        let requirements = RequirementSet::from_entries(raw.requires)?;

        let mut profiles = BTreeMap::new();
        for (name, profile) in raw.profiles {
            profiles.insert(name, validate_profile(profile)?);
        }

        let debug_label = match &raw.debug_configuration {
            Some(label) => ConfigLabel::named(label)?,
            None => ConfigLabel::named(DEFAULT_DEBUG_LABEL)?,
        };

        Ok(Self {
            project: raw.project,
            registry: raw.registry,
            settings,
            requirements,
            layout: LayoutConfig {
                folder: raw.layout.folder,
                packages_folder: raw.layout.packages_folder,
            },
            debug_label,
            profiles,
        })
    }

    /// Resolve the active profile.
    ///
    /// `None` selects the manifest's `default` profile when defined, or the
    /// implicit empty preset otherwise. A named selection must exist.
    pub fn profile(&self, name: Option<&str>) -> Result<Profile, AppError> {
        match name {
            None => Ok(self.profiles.get("default").cloned().unwrap_or_default()),
            Some(name) => self.profiles.get(name).cloned().ok_or_else(|| {
                let mut available: Vec<&str> =
                    self.profiles.keys().map(String::as_str).collect();
                if !available.contains(&"default") {
                    available.insert(0, "default");
                }
                AppError::UnknownProfile {
                    name: name.to_string(),
                    available: available.join(", "),
                }
            }),
        }
    }

    /// Names of all defined profiles.
    pub fn profile_names(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }
}

fn validate_profile(raw: RawProfile) -> Result<Profile, AppError> {
    let mut generators = Vec::new();
    for entry in raw.generators {
        let (family_name, required) = match entry {
            RawGeneratorEntry::Family(name) => (name, false),
            RawGeneratorEntry::Detailed { family, required } => (family, required),
        };
        let family: GeneratorFamily = family_name.parse()?;
        if family == GeneratorFamily::CmakeToolchain {
            return Err(AppError::config_error(
                "The toolchain generator is scheduled automatically with cmake",
            ));
        }
        generators.push(ProfileGenerator { family, required });
    }
    Ok(Profile { generators })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::{BuildVariant, Os};

    const FULL: &str = r#"
project: softgpu
registry: https://packages.example.com
settings:
  os: windows
  compiler: msvc
  arch: x86_64
  build_type: Debug
requires:
  - name: tauutils
    version: "^1.3.10"
    static: true
profiles:
  cross:
    generators:
      - cmake
      - family: msbuild
        required: true
layout:
  folder: libs/deps
debug_configuration: TestSetup
"#;

    #[test]
    fn parses_a_full_manifest() {
        let manifest = ProjectManifest::parse(FULL).unwrap();
        assert_eq!(manifest.project, "softgpu");
        assert_eq!(manifest.settings.os(), Os::Windows);
        assert_eq!(manifest.settings.build_variant(), BuildVariant::Debug);
        assert_eq!(manifest.requirements.len(), 1);
        assert_eq!(manifest.layout.folder.as_deref(), Some("libs/deps"));
        assert_eq!(manifest.debug_label, ConfigLabel::named("TestSetup").unwrap());

        let cross = manifest.profile(Some("cross")).unwrap();
        assert_eq!(cross.generators.len(), 2);
        assert_eq!(cross.generators[0].family, GeneratorFamily::Cmake);
        assert!(!cross.generators[0].required);
        assert_eq!(cross.generators[1].family, GeneratorFamily::Msbuild);
        assert!(cross.generators[1].required);
    }

    #[test]
    fn minimal_manifest_defaults() {
        let manifest = ProjectManifest::parse(
            "project: demo\nsettings:\n  os: linux\n  compiler: gcc\n  arch: x86_64\n  build_type: Release\n",
        )
        .unwrap();
        assert!(manifest.requirements.is_empty());
        assert!(manifest.registry.is_none());
        assert_eq!(manifest.debug_label, ConfigLabel::named(DEFAULT_DEBUG_LABEL).unwrap());
        assert!(manifest.profile(None).unwrap().generators.is_empty());
    }

    #[test]
    fn unknown_build_type_fails() {
        let err = ProjectManifest::parse(
            "project: demo\nsettings:\n  os: linux\n  compiler: gcc\n  arch: x86_64\n  build_type: Coverage\n",
        )
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidBuildVariant(_)));
    }

    #[test]
    fn conflicting_requires_fail() {
        let content = r#"
project: demo
settings: {os: linux, compiler: gcc, arch: x86_64, build_type: Release}
requires:
  - {name: zlib, version: "^1.2"}
  - {name: zlib, version: "^1.3"}
"#;
        let err = ProjectManifest::parse(content).unwrap_err();
        assert!(matches!(err, AppError::DuplicateDependency { name, .. } if name == "zlib"));
    }

    #[test]
    fn unknown_profile_lists_available() {
        let manifest = ProjectManifest::parse(FULL).unwrap();
        let err = manifest.profile(Some("ci")).unwrap_err();
        match err {
            AppError::UnknownProfile { name, available } => {
                assert_eq!(name, "ci");
                assert!(available.contains("cross"));
                assert!(available.contains("default"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn profile_rejects_unknown_family() {
        let content = r#"
project: demo
settings: {os: linux, compiler: gcc, arch: x86_64, build_type: Release}
profiles:
  odd:
    generators: [ninja]
"#;
        let err = ProjectManifest::parse(content).unwrap_err();
        assert!(matches!(err, AppError::UnknownGeneratorFamily(name) if name == "ninja"));
    }

    #[test]
    fn profile_rejects_direct_toolchain_request() {
        let content = r#"
project: demo
settings: {os: linux, compiler: gcc, arch: x86_64, build_type: Release}
profiles:
  odd:
    generators: [toolchain]
"#;
        let err = ProjectManifest::parse(content).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = ProjectManifest::parse("project: [").unwrap_err();
        assert!(matches!(err, AppError::ParseError { what, .. } if what == MANIFEST_FILE));
    }

    #[test]
    fn reserved_debug_configuration_fails() {
        let content = r#"
project: demo
settings: {os: windows, compiler: msvc, arch: x86_64, build_type: Debug}
debug_configuration: cmake
"#;
        let err = ProjectManifest::parse(content).unwrap_err();
        assert!(matches!(err, AppError::InvalidLabel { .. }));
    }
}
