//! # SDK Documentation Tooling
//!
//! This library builds the generated parts of the SDK documentation site:
//! the per-SDK "get started" guides and the links to every SDK's API
//! documentation. It is used by the `sdk-docs` command-line tool.
//!
//! ## Quick Example
//!
//! ```
//! use sdk_docs::toctree::{patch_content, Markers, TocEntry};
//!
//! let page = "```{toctree}\n:maxdepth: 1\nRust APIs <rust.md>\n```\n";
//! let entries = vec![TocEntry::new("Go APIs", "api_docs/go.md")];
//!
//! let patched = patch_content(page, &entries, &Markers::default()).unwrap();
//! assert_eq!(
//!     patched,
//!     "```{toctree}\n:maxdepth: 1\nGo APIs <api_docs/go.md>\nRust APIs <rust.md>\n```\n"
//! );
//!
//! // Patching again changes nothing.
//! assert_eq!(patch_content(&patched, &entries, &Markers::default()).unwrap(), patched);
//! ```
//!
//! ## Core Concepts
//!
//! - **Toctree patching (`toctree`)**: rewrites the marker-delimited link list
//!   of an index page, new entries first, duplicates removed.
//! - **Release tags (`version`)**: picks the latest `vX.Y.Z` tag of an SDK and
//!   orders release directory names.
//! - **Get-started guides (`get_started`)**: clones every SDK, stages the guide
//!   of its latest release and links it from `get_started.md`.
//! - **API docs (`api_docs`)**: reads the releases published in the docs
//!   repository, generates per-platform pages and links them from
//!   `api_docs.md`, with a check-only mode.
//! - **Git (`repository`, `git`)**: the `GitOperations` seam and its
//!   implementation on top of the system `git` command.
//! - **Configuration (`config`, `defaults`)**: optional YAML overrides of the
//!   built-in SDK list and URLs.

pub mod api_docs;
pub mod config;
pub mod defaults;
pub mod error;
pub mod exit_codes;
pub mod get_started;
pub mod git;
pub mod output;
pub mod repository;
pub mod suggestions;
pub mod toctree;
pub mod version;

#[cfg(test)]
mod toctree_proptest;
