//! # Git Operations Seam
//!
//! The pipelines never call `git` directly. They go through the
//! [`GitOperations`] trait, whose production implementation,
//! [`SystemGit`], wraps the functions in [`crate::git`]. Tests replace it
//! with fakes that lay out repository contents on disk and report canned
//! tags, so both pipelines can be exercised without network access.

use crate::error::Result;
use std::path::Path;

/// Trait for git operations - allows mocking in tests
pub trait GitOperations {
    /// Clones `url` into `target_dir`.
    ///
    /// A shallow clone only needs to provide the default branch's files.
    fn clone_repo(&self, url: &str, target_dir: &Path, shallow: bool) -> Result<()>;

    /// Lists the tags of a repository previously cloned into `repo_dir`.
    fn list_tags(&self, repo_dir: &Path) -> Result<Vec<String>>;

    /// Checks out `ref_name` in a repository previously cloned into `repo_dir`.
    fn checkout(&self, repo_dir: &Path, ref_name: &str) -> Result<()>;
}

/// The default implementation of `GitOperations`, which uses the system's
/// `git` command to perform real Git operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemGit;

impl GitOperations for SystemGit {
    fn clone_repo(&self, url: &str, target_dir: &Path, shallow: bool) -> Result<()> {
        crate::git::clone(url, target_dir, shallow)
    }

    fn list_tags(&self, repo_dir: &Path) -> Result<Vec<String>> {
        crate::git::list_tags(repo_dir)
    }

    fn checkout(&self, repo_dir: &Path, ref_name: &str) -> Result<()> {
        crate::git::checkout(repo_dir, ref_name)
    }
}
