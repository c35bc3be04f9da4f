//! Shared test utilities for the CLI end-to-end tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_api_docs_index();
//!     fixture.command().arg("api-docs").assert().failure();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::pages;
    #[allow(unused_imports)]
    pub use super::GitRepo;
    pub use super::TestFixture;
}

/// Index pages as found in the documentation source tree.
#[allow(dead_code)]
pub mod pages {
    pub const API_DOCS: &str = "# API documentation\n\
        \n\
        ```{toctree}\n\
        :maxdepth: 1\n\
        ```\n";

    pub const GET_STARTED: &str = "# Get started\n\
        \n\
        ```{toctree}\n\
        :maxdepth: 1\n\
        ```\n";

    pub const NO_TOCTREE: &str = "# API documentation\n\nNothing to see.\n";
}

/// A documentation checkout in a temporary directory.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add `source/api_docs.md` with an empty toctree.
    pub fn with_api_docs_index(self) -> Self {
        self.with_file("source/api_docs.md", pages::API_DOCS)
    }

    /// Add `source/get_started.md` with an empty toctree.
    pub fn with_get_started_index(self) -> Self {
        self.with_file("source/get_started.md", pages::GET_STARTED)
    }

    /// Add an `sdk-docs.yaml` configuration file with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.with_file("sdk-docs.yaml", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of `source/<relative>`.
    pub fn source(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join("source").join(relative)
    }

    /// Read `source/<relative>` as a string.
    pub fn read_source(&self, relative: &str) -> String {
        std::fs::read_to_string(self.source(relative)).expect("Failed to read source file")
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// The `sdk-docs` command running inside the fixture directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("sdk-docs");
        cmd.current_dir(self.path())
            .env_remove("SDK_DOCS_CONFIG")
            .env_remove("SDK_DOCS_SOURCE")
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A local git repository built for a test, usable as a clone URL.
#[allow(dead_code)]
pub struct GitRepo {
    dir: PathBuf,
}

#[allow(dead_code)]
impl GitRepo {
    /// Initialise an empty repository at `dir`.
    pub fn init(dir: &Path) -> Self {
        std::fs::create_dir_all(dir).expect("Failed to create repository directory");
        let repo = Self {
            dir: dir.to_path_buf(),
        };
        repo.git(&["init", "--quiet"]);
        repo
    }

    /// The URL to clone this repository from.
    pub fn url(&self) -> String {
        self.dir.display().to_string()
    }

    /// Write a file into the working tree.
    pub fn write(&self, path: &str, content: &str) -> &Self {
        let full_path = self.dir.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directory");
        }
        std::fs::write(full_path, content).expect("Failed to write file");
        self
    }

    /// Commit everything in the working tree.
    pub fn commit(&self, message: &str) -> &Self {
        self.git(&["add", "--all"]);
        self.git(&[
            "-c",
            "user.name=Test",
            "-c",
            "user.email=test@example.com",
            "commit",
            "--quiet",
            "--allow-empty",
            "-m",
            message,
        ]);
        self
    }

    /// Tag the current commit.
    pub fn tag(&self, name: &str) -> &Self {
        self.git(&["tag", name]);
        self
    }

    fn git(&self, args: &[&str]) {
        let status = Command::new("git")
            .arg("-C")
            .arg(&self.dir)
            .args(args)
            .status()
            .expect("Failed to run git");
        assert!(status.success(), "git {:?} failed", args);
    }
}
