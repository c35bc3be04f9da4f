//! # Error Suggestions
//!
//! Helpers that turn library errors into messages telling the user what went
//! wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sdk_docs::suggestions;
//!
//! let report = get_started::run(&SystemGit, &config, &source_dir)
//!     .map_err(suggestions::explain)?;
//! ```

use crate::error::Error;
use std::path::Path;

/// Generate an error for when the documentation source tree lacks an index
/// page the command patches.
pub fn index_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Index page not found: {path}\n\n\
         hint: Run sdk-docs from the documentation repository root\n\
         hint: Use --source-dir to point at the Sphinx source directory\n\
         hint: Set the SDK_DOCS_SOURCE environment variable",
        path = path.display()
    )
}

/// Generate an error for a toctree marker that is missing from a page.
pub fn marker_not_found(path: &Path, kind: &str, marker: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Toctree {kind} marker '{marker}' not found in {path}\n\n\
         hint: The page needs a toctree block such as:\n\
         \n\
         ```{{toctree}}\n\
         :maxdepth: 1\n\
         ```\n\n\
         hint: Custom markers can be set under 'markers:' in sdk-docs.yaml",
        path = path.display()
    )
}

/// Generate an error for a failed clone.
pub fn clone_failed(url: &str, message: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Failed to clone {url}: {message}\n\n\
         hint: Check that git is installed and on PATH\n\
         hint: Check the repository URL and your network connection"
    )
}

/// Converts a library error into a user-facing error, adding hints for the
/// failures users can act on.
pub fn explain(error: Error) -> anyhow::Error {
    match error {
        Error::MissingFile { path }
            if path
                .file_name()
                .is_some_and(|name| name == "api_docs.md" || name == "get_started.md") =>
        {
            index_not_found(&path)
        }
        Error::MarkerNotFound { path, kind, marker } => marker_not_found(&path, kind, &marker),
        Error::GitClone { url, message } => clone_failed(&url, &message),
        other => anyhow::Error::new(other),
    }
}
