use std::io;

use thiserror::Error;

/// Library-wide error type for depgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// No depgen.yml manifest found at the target location.
    #[error("No depgen.yml manifest found. Run 'depgen init' first.")]
    ManifestMissing,

    /// A depgen.yml manifest already exists at the target location.
    #[error("depgen.yml already exists. Use --force to overwrite.")]
    ManifestExists,

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Build variant is not a recognized value.
    #[error("Invalid build type '{0}': must be one of Debug, Release, RelWithDebInfo, MinSizeRel")]
    InvalidBuildVariant(String),

    /// A settings field holds an unrecognized value.
    #[error("Invalid {field} '{value}': must be one of {allowed}")]
    InvalidSetting { field: &'static str, value: String, allowed: &'static str },

    /// The same dependency is declared twice with conflicting requirements.
    #[error(
        "Dependency '{name}' declared twice with conflicting requirements ({first} vs {second})"
    )]
    DuplicateDependency { name: String, first: String, second: String },

    /// A dependency declaration is malformed.
    #[error("Invalid dependency '{name}': {reason}")]
    InvalidRequirement { name: String, reason: String },

    /// A dependency name was referenced but never declared.
    #[error("Dependency '{0}' is not declared in the manifest")]
    UnknownDependency(String),

    /// The output layout override is unusable.
    #[error("Invalid generators folder '{value}': {reason}")]
    InvalidLayout { value: String, reason: String },

    /// A configuration label is malformed or collides with a reserved folder.
    #[error("Invalid configuration label '{label}': {reason}")]
    InvalidLabel { label: String, reason: String },

    /// The requested profile is not defined in the manifest.
    #[error("Profile '{name}' not found. Available: {available}")]
    UnknownProfile { name: String, available: String },

    /// A profile names a generator family that does not exist.
    #[error("Unknown generator family '{0}': must be one of msbuild, pkgconfig, cmake")]
    UnknownGeneratorFamily(String),

    /// A generator family is not supported for the configured target.
    #[error("Generator '{family}' is not available for os '{os}'")]
    GeneratorUnavailable { family: String, os: String },

    /// Template rendering failed.
    #[error("Failed to render template '{name}': {details}")]
    Template { name: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Coarse `io::ErrorKind` classification for embedding callers.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::ParseError { .. }
            | AppError::InvalidBuildVariant(_)
            | AppError::InvalidSetting { .. }
            | AppError::DuplicateDependency { .. }
            | AppError::InvalidRequirement { .. }
            | AppError::InvalidLayout { .. }
            | AppError::InvalidLabel { .. }
            | AppError::UnknownGeneratorFamily(_)
            | AppError::Template { .. } => io::ErrorKind::InvalidInput,
            AppError::ManifestMissing
            | AppError::UnknownDependency(_)
            | AppError::UnknownProfile { .. } => io::ErrorKind::NotFound,
            AppError::ManifestExists => io::ErrorKind::AlreadyExists,
            AppError::GeneratorUnavailable { .. } => io::ErrorKind::Unsupported,
        }
    }
}
