//! # Error Handling
//!
//! This module defines the centralized error type for the `sdk-docs` library.
//! It uses the `thiserror` library to create an `Error` enum covering every
//! failure the documentation pipelines can hit, with messages that name the
//! offending file, repository or marker.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all library errors.
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! The binary wraps these errors with `anyhow` context before printing them,
//! so every variant is written to read well as the last line of a report.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sdk-docs operations
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file could not be parsed or failed validation.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// Cloning a Git repository failed.
    #[error("Git clone error for {url}: {message}")]
    GitClone { url: String, message: String },

    /// A Git command inside an already cloned repository failed.
    #[error("Git command failed in {dir}: {command} - {stderr}")]
    GitCommand {
        command: String,
        dir: String,
        stderr: String,
    },

    /// A toctree marker line could not be found in a target file.
    #[error("Toctree {kind} marker '{marker}' not found in {}", path.display())]
    MarkerNotFound {
        path: PathBuf,
        /// Either `start` or `end`
        kind: &'static str,
        marker: String,
    },

    /// A file the pipeline reads from the documentation tree is missing.
    #[error("Required file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A URL parsing error, wrapped from `url::ParseError`.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
