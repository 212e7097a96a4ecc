//! Error types for localkit operations.
//!
//! This module defines [`LocalkitError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `LocalkitError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `LocalkitError::Other`) for unexpected errors
//! - An unsupported host environment is NOT an error: the capability gate
//!   reports it as verdict data (see `gate::Verdict`), never as a `Result`
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for localkit operations.
#[derive(Debug, Error)]
pub enum LocalkitError {
    /// Requested tool does not exist in the registry.
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    /// Tool was given arguments it cannot work with.
    #[error("Invalid arguments for tool '{tool}': {message}")]
    InvalidToolArgs { tool: String, message: String },

    /// Input file is not a format the pipeline handles.
    #[error("Unsupported input format: {path} (only PNG is supported)")]
    UnsupportedFormat { path: PathBuf },

    /// Failed to decode an input image.
    #[error("Failed to decode {path}: {message}")]
    ImageDecode { path: PathBuf, message: String },

    /// Failed to encode or write an output image.
    #[error("Failed to write {path}: {message}")]
    ImageEncode { path: PathBuf, message: String },

    /// Requested locale is not one of the product locales.
    #[error("Unknown language: {code}")]
    UnknownLocale { code: String },

    /// Failed to parse the preferences file.
    #[error("Failed to parse preferences at {path}: {message}")]
    PreferencesParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for localkit operations.
pub type Result<T> = std::result::Result<T, LocalkitError>;
