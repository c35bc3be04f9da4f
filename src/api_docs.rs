//! # API Documentation Links
//!
//! The rendered API documentation of every SDK lives in a separate docs
//! repository, one directory per platform and one subdirectory per release:
//!
//! ```text
//! device-sdks/
//!   common/        (shared assets, ignored)
//!   go/1.0/ go/1.1/ go/latest/
//!   rust/0.8/
//! ```
//!
//! A platform with a single release is linked straight to its external docs
//! from `api_docs.md`. A platform with several releases gets an intermediate
//! page, `api_docs/<platform>.md`, listing every release newest first, and
//! `api_docs.md` links that page instead.
//!
//! [`check_outputs`] computes the same result without writing, for CI jobs
//! that only want to know whether the committed files are current.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::repository::GitOperations;
use crate::toctree::{self, capitalize, Markers, PatchMode, PatchOutcome, TocEntry};
use crate::version::compare_release_names;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Index page holding the API toctree, relative to the source dir.
pub const INDEX_FILE_NAME: &str = "api_docs.md";

/// Directory receiving generated platform pages, relative to the source dir.
pub const PAGES_DIR: &str = "api_docs";

/// Platform directory holding shared assets rather than API docs.
const COMMON_DIR: &str = "common";

/// Release directories that alias another release.
const RELEASE_ALIASES: [&str; 2] = ["latest", "snapshot"];

/// Releases per platform, each list sorted ascending.
pub type PlatformReleases = BTreeMap<String, Vec<String>>;

/// Generated toctree entries and pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiIndex {
    /// Entries for `api_docs.md`, one per platform.
    pub entries: Vec<TocEntry>,
    /// Page file name (`<platform>.md`) to page content.
    pub pages: BTreeMap<String, String>,
}

/// What a check-only run found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Pages that are missing or differ from the generated content.
    pub stale_pages: Vec<String>,
    pub index_changed: bool,
}

impl CheckReport {
    pub fn is_up_to_date(&self) -> bool {
        self.stale_pages.is_empty() && !self.index_changed
    }
}

/// What a writing run changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreReport {
    pub written_pages: Vec<String>,
    pub index: PatchOutcome,
}

/// Link to the API docs of one platform release.
fn release_url(base_url: &str, platform: &str, release: &str) -> String {
    format!("{base_url}/{platform}/{release}/api")
}

/// Entry linking a single-release platform directly from `api_docs.md`.
pub fn direct_entry(base_url: &str, platform: &str, release: &str) -> TocEntry {
    TocEntry::new(
        format!("{} APIs", capitalize(platform)),
        release_url(base_url, platform, release),
    )
}

/// Entry linking a multi-release platform's generated page.
pub fn page_entry(platform: &str) -> TocEntry {
    TocEntry::new(
        format!("{} APIs", capitalize(platform)),
        format!("{PAGES_DIR}/{platform}.md"),
    )
}

/// Entry for one release on a platform page.
pub fn release_entry(base_url: &str, platform: &str, release: &str) -> TocEntry {
    TocEntry::new(
        format!("{} v{} APIs", capitalize(platform), release),
        release_url(base_url, platform, release),
    )
}

/// Renders the page of a multi-release platform. `releases` are expected in
/// ascending order and are listed newest first.
pub fn render_platform_page(base_url: &str, platform: &str, releases: &[String]) -> String {
    let title = capitalize(platform);
    let entries: String = releases
        .iter()
        .rev()
        .map(|release| release_entry(base_url, platform, release).to_line())
        .collect();

    format!(
        "# {title} APIs documentation\n\
         \n\
         Find the {title} documentation at the following links:\n\
         ```{{toctree}}\n\
         :maxdepth: 1\n\
         {entries}\n\
         ```\n"
    )
}

/// Builds the index entries and platform pages.
pub fn generate_index(base_url: &str, platforms: &PlatformReleases) -> ApiIndex {
    let mut index = ApiIndex::default();

    for (platform, releases) in platforms {
        match releases.as_slice() {
            [] => {}
            [release] => index
                .entries
                .push(direct_entry(base_url, platform, release)),
            _ => {
                index.entries.push(page_entry(platform));
                index.pages.insert(
                    format!("{platform}.md"),
                    render_platform_page(base_url, platform, releases),
                );
            }
        }
    }

    index
}

/// Reads the platform and release directories under `api_dir`.
pub fn collect_platform_releases(api_dir: &Path) -> Result<PlatformReleases> {
    if !api_dir.is_dir() {
        return Err(Error::MissingFile {
            path: api_dir.to_path_buf(),
        });
    }

    let mut platforms = PlatformReleases::new();
    for entry in fs::read_dir(api_dir)? {
        let platform_dir = entry?.path();
        let Some(platform) = dir_name(&platform_dir) else {
            continue;
        };
        if platform == COMMON_DIR {
            continue;
        }

        let mut releases = Vec::new();
        for release_entry in fs::read_dir(&platform_dir)? {
            let release_dir = release_entry?.path();
            if let Some(release) = dir_name(&release_dir) {
                if !RELEASE_ALIASES.contains(&release.as_str()) {
                    releases.push(release);
                }
            }
        }

        if releases.is_empty() {
            log::warn!("No releases found for platform {}, skipping", platform);
            continue;
        }

        releases.sort_by(|a, b| compare_release_names(a, b));
        log::debug!("Platform {} has releases {:?}", platform, releases);
        platforms.insert(platform, releases);
    }

    Ok(platforms)
}

/// The UTF-8 name of `path` if it is a directory.
fn dir_name(path: &Path) -> Option<String> {
    if !path.is_dir() {
        return None;
    }
    path.file_name()?.to_str().map(str::to_string)
}

/// Clones the docs repository and reads its platform releases.
pub fn fetch_platform_releases(git: &dyn GitOperations, config: &Config) -> Result<PlatformReleases> {
    let scratch = tempfile::Builder::new().prefix("sdk_doc_").tempdir()?;
    let docs_dir = scratch.path().join("docs");

    git.clone_repo(&config.docs_repo, &docs_dir, true)?;
    collect_platform_releases(&docs_dir.join(&config.api_docs_subdir))
}

/// Writes the generated pages and patches `api_docs.md`.
pub fn store_outputs(source_dir: &Path, index: &ApiIndex, markers: &Markers) -> Result<StoreReport> {
    let index_path = source_dir.join(INDEX_FILE_NAME);
    // Missing markers must fail before any page is written.
    toctree::patch_file(&index_path, &index.entries, markers, PatchMode::Check)?;

    let pages_dir = source_dir.join(PAGES_DIR);
    fs::create_dir_all(&pages_dir)?;

    let mut written_pages = Vec::new();
    for (file_name, content) in &index.pages {
        let path = pages_dir.join(file_name);
        if fs::read_to_string(&path).is_ok_and(|current| current == *content) {
            continue;
        }
        log::info!("Writing {}", path.display());
        fs::write(&path, content)?;
        written_pages.push(file_name.clone());
    }

    let outcome = toctree::patch_file(&index_path, &index.entries, markers, PatchMode::Write)?;

    Ok(StoreReport {
        written_pages,
        index: outcome,
    })
}

/// Compares the generated output with the source tree without writing.
pub fn check_outputs(source_dir: &Path, index: &ApiIndex, markers: &Markers) -> Result<CheckReport> {
    let pages_dir = source_dir.join(PAGES_DIR);

    let mut stale_pages = Vec::new();
    for (file_name, content) in &index.pages {
        let path = pages_dir.join(file_name);
        let up_to_date = path.is_file() && fs::read_to_string(&path)? == *content;
        if !up_to_date {
            log::info!("{} is missing or out of date", path.display());
            stale_pages.push(file_name.clone());
        }
    }

    let outcome = toctree::patch_file(
        &source_dir.join(INDEX_FILE_NAME),
        &index.entries,
        markers,
        PatchMode::Check,
    )?;

    Ok(CheckReport {
        stale_pages,
        index_changed: outcome.is_changed(),
    })
}

/// Ensures the index page exists before any network work starts.
pub fn ensure_index(source_dir: &Path) -> Result<()> {
    let index = source_dir.join(INDEX_FILE_NAME);
    if index.is_file() {
        Ok(())
    } else {
        Err(Error::MissingFile { path: index })
    }
}
