//! End-to-end tests for the `api-docs` command.
//!
//! The docs repository is a local git repository built by each test, so
//! these tests need a `git` executable but no network access.
//!
//! ```bash
//! cargo test --features integration-tests --test cli_e2e_api_docs
//! ```

#[allow(dead_code)]
mod common;
use common::prelude::*;

/// Builds a docs repository publishing the given `platform/release` dirs.
fn docs_repo(fixture: &TestFixture, releases: &[&str]) -> GitRepo {
    let repo = GitRepo::init(&fixture.path().join("remote-docs"));
    repo.write("device-sdks/common/style.css", "body {}\n");
    for release in releases {
        repo.write(
            &format!("device-sdks/{release}/api/index.html"),
            "<html></html>\n",
        );
    }
    repo.commit("Publish API docs");
    repo
}

fn fixture_with_docs(releases: &[&str]) -> TestFixture {
    let fixture = TestFixture::new().with_api_docs_index();
    let repo = docs_repo(&fixture, releases);
    fixture.with_config(&format!(
        "docs-repo: {}\napi-docs-base-url: https://docs.example.org/device-sdks\n",
        repo.url()
    ))
}

#[test]
fn test_api_docs_help() {
    let mut cmd = cargo_bin_cmd!("sdk-docs");

    cmd.args(["api-docs", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Link the API documentation of all SDK releases",
        ))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_api_docs_missing_marker() {
    let fixture = TestFixture::new().with_file("source/api_docs.md", pages::NO_TOCTREE);
    let repo = docs_repo(&fixture, &["rust/0.8"]);
    let fixture = fixture.with_config(&format!("docs-repo: {}\n", repo.url()));

    fixture
        .command()
        .arg("api-docs")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Toctree start marker ':maxdepth: 1' not found",
        ));
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_api_docs_writes_pages_and_index() {
    let fixture = fixture_with_docs(&["go/1.0", "go/1.1", "go/latest", "rust/0.8"]);

    fixture
        .command()
        .arg("api-docs")
        .assert()
        .success()
        .stdout(predicate::str::contains("go: 1.0, 1.1"))
        .stdout(predicate::str::contains("+ api_docs/go.md"));

    assert_eq!(
        fixture.read_source("api_docs.md"),
        "# API documentation\n\
         \n\
         ```{toctree}\n\
         :maxdepth: 1\n\
         Go APIs <api_docs/go.md>\n\
         Rust APIs <https://docs.example.org/device-sdks/rust/0.8/api>\n\
         ```\n"
    );

    let page = fixture.read_source("api_docs/go.md");
    assert!(page.starts_with("# Go APIs documentation\n"));
    let newest = page.find("Go v1.1 APIs").unwrap();
    let oldest = page.find("Go v1.0 APIs").unwrap();
    assert!(newest < oldest);
    assert!(!fixture.source("api_docs/rust.md").exists());
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_api_docs_dry_run_reports_changes_without_writing() {
    let fixture = fixture_with_docs(&["go/1.0", "go/1.1"]);

    fixture
        .command()
        .args(["api-docs", "--dry-run"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Changes needed"))
        .stdout(predicate::str::contains("~ api_docs/go.md"))
        .stdout(predicate::str::contains("~ api_docs.md"));

    assert_eq!(fixture.read_source("api_docs.md"), pages::API_DOCS);
    assert!(!fixture.source("api_docs").exists());
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_api_docs_dry_run_after_update_succeeds() {
    let fixture = fixture_with_docs(&["go/1.0", "go/1.1", "rust/0.8"]);

    fixture.command().arg("api-docs").assert().success();
    let index = fixture.read_source("api_docs.md");

    fixture
        .command()
        .args(["api-docs", "--dry-run"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("No changes needed"));

    // A second write run is a no-op.
    fixture
        .command()
        .arg("api-docs")
        .assert()
        .success()
        .stdout(predicate::str::contains("api_docs.md is up to date"));
    assert_eq!(fixture.read_source("api_docs.md"), index);
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_api_docs_custom_source_dir() {
    let fixture = TestFixture::new().with_file("docs/src/api_docs.md", pages::API_DOCS);
    let repo = docs_repo(&fixture, &["python/0.50"]);
    let fixture = fixture.with_config(&format!("docs-repo: {}\n", repo.url()));

    fixture
        .command()
        .args(["--source-dir", "docs/src", "api-docs"])
        .assert()
        .success();

    let index = std::fs::read_to_string(fixture.path().join("docs/src/api_docs.md")).unwrap();
    assert!(index.contains(
        "Python APIs <https://docs.astarte-platform.org/device-sdks/python/0.50/api>\n"
    ));
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_api_docs_unreachable_repository() {
    let fixture = TestFixture::new()
        .with_api_docs_index()
        .with_config("docs-repo: /nonexistent/docs-repo\n");

    fixture
        .command()
        .arg("api-docs")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to clone /nonexistent/docs-repo"));
}
