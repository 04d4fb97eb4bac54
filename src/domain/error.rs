use std::io;

use thiserror::Error;

/// Library-wide error type for parameter resolution.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A numeric macro parameter is present but not a base-10 integer.
    #[error("Invalid value '{value}' for parameter '{name}': expected an integer")]
    InvalidParameterFormat { name: String, value: String },

    /// No system under test in the space matches the resolved key.
    #[error(
        "System under test '{}' is not part of the space selection",
        .key.as_deref().unwrap_or("")
    )]
    SutNotFound { key: Option<String> },

    /// The directory knows nothing about the requested space.
    #[error("Space '{0}' not found")]
    SpaceNotFound(String),

    /// The page context knows nothing about the requested page.
    #[error("Page '{0}' not found")]
    PageNotFound(String),

    /// Parameter name outside the recognized set.
    #[error("Unknown parameter '{name}'. Expected one of: {expected}")]
    UnknownParameter { name: String, expected: String },

    /// No message catalog exists for the requested locale.
    #[error("Unknown locale '{0}'")]
    UnknownLocale(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    YamlParseError(#[from] serde_yaml::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn invalid_format(name: &str, value: &str) -> Self {
        AppError::InvalidParameterFormat { name: name.to_string(), value: value.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::InvalidParameterFormat { .. }
            | AppError::UnknownParameter { .. }
            | AppError::UnknownLocale(_)
            | AppError::ParseError { .. }
            | AppError::TomlParseError(_)
            | AppError::YamlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::SutNotFound { .. }
            | AppError::SpaceNotFound(_)
            | AppError::PageNotFound(_) => io::ErrorKind::NotFound,
            AppError::JsonError(_) => io::ErrorKind::InvalidData,
        }
    }
}
