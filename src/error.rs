//! Error types for the pricing admin console
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

use crate::domain::form::ValidationErrors;
use crate::domain::record::{EntityKind, RecordId};

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// One or more form fields failed validation
    #[snafu(display("Validation failed: {errors}"))]
    Validation { errors: ValidationErrors },

    /// A command targeted a record that is not in the store
    #[snafu(display("{kind} {id} not found"))]
    NotFound { kind: EntityKind, id: RecordId },

    /// The record has no status field
    #[snafu(display("{kind} records have no status"))]
    NoStatus { kind: EntityKind },

    /// IO error (settings file, log directory)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// Rolling log file could not be set up
    #[snafu(display("Log file setup failed: {source}"))]
    LogInit {
        source: tracing_appender::rolling::InitError,
    },

    /// Global subscriber was already installed
    #[snafu(display("Logging already initialized: {source}"))]
    LogInstall {
        source: tracing_subscriber::util::TryInitError,
    },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Error::Validation { errors }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
