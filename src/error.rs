//! Error types and handling for relprep
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for relprep operations
#[derive(Error, Diagnostic, Debug)]
pub enum RelprepError {
    // Text I/O errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(relprep::text::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(relprep::text::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("File is not valid UTF-8: {path}")]
    #[diagnostic(
        code(relprep::text::decode_failed),
        help("Source documents and the description file must be UTF-8 encoded")
    )]
    DecodeFailed { path: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(relprep::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(relprep::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // Converter errors
    #[error("Converter produced no output: {command}")]
    #[diagnostic(
        code(relprep::convert::no_output),
        help("Check that the converter (pandoc by default) is installed and on PATH")
    )]
    ConversionFailed { command: String },

    #[error("Converter command is empty")]
    #[diagnostic(
        code(relprep::convert::empty_command),
        help("Set a non-empty 'converter' command in relprep.yaml")
    )]
    ConverterNotConfigured,

    // Description errors
    #[error("Description file not found: {path}")]
    #[diagnostic(
        code(relprep::description::missing),
        help("Run 'relprep prep' to generate the description file, then commit it")
    )]
    DescriptionMissing { path: String },

    // Publish errors
    #[error("Aborted: nothing published")]
    #[diagnostic(
        code(relprep::publish::declined),
        help("Answer exactly 'yes' at the prompt to upload")
    )]
    PublishDeclined,

    // External command errors
    #[error("Command failed: {command}")]
    #[diagnostic(code(relprep::exec::command_failed))]
    CommandFailed { command: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(relprep::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for RelprepError {
    fn from(err: std::io::Error) -> Self {
        RelprepError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for RelprepError {
    fn from(err: serde_yaml::Error) -> Self {
        RelprepError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for RelprepError {
    fn from(err: inquire::InquireError) -> Self {
        RelprepError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, RelprepError>;
