//! # Get-Started Aggregation
//!
//! Every SDK repository may ship a `get_started.md` guide at its root. This
//! module publishes the guide of each SDK's latest standard release:
//!
//! 1. **Collect**: clone each configured repository into a scratch
//!    directory, check out its latest `vX.Y.Z` tag and stage a copy of the
//!    guide as `get_started_<sdk>_<X.Y>.md`. Repositories without standard
//!    releases stay on their default branch and are labelled `latest`.
//! 2. **Install**: once every repository has been processed, copy the staged
//!    guides into `<source>/get_started/` and patch the toctree of
//!    `<source>/get_started.md` so it links them, newest entries first.
//!
//! Nothing under the source tree is touched until all clones succeeded.

use crate::config::{Config, SdkRepo};
use crate::error::{Error, Result};
use crate::repository::GitOperations;
use crate::toctree::{self, capitalize, Markers, PatchMode, PatchOutcome, TocEntry};
use crate::version::latest_standard_release;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the guide inside each SDK repository.
pub const GUIDE_FILE_NAME: &str = "get_started.md";

/// Index page holding the get-started toctree, relative to the source dir.
pub const INDEX_FILE_NAME: &str = "get_started.md";

/// Directory receiving the guides, relative to the source dir.
pub const GUIDES_DIR: &str = "get_started";

/// Label used for repositories without any standard release.
pub const LATEST_LABEL: &str = "latest";

/// Scratch subdirectory holding the SDK clones.
const CLONES_DIR: &str = "repos";

/// A guide found in an SDK repository and staged for publishing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideFile {
    pub sdk: String,
    /// `<major>.<minor>` of the release, or `latest`.
    pub label: String,
    /// The checked out tag, if any.
    pub tag: Option<String>,
    /// Published file name, `get_started_<sdk>_<label>.md`.
    pub file_name: String,
    pub staged_path: PathBuf,
}

impl GuideFile {
    /// The toctree entry linking this guide from the index page.
    pub fn toc_entry(&self) -> TocEntry {
        TocEntry::new(
            format!("Get started with {} ({})", capitalize(&self.sdk), self.label),
            format!("{GUIDES_DIR}/{}", self.file_name),
        )
    }
}

/// Outcome of a full get-started run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetStartedReport {
    pub guides: Vec<GuideFile>,
    pub index: PatchOutcome,
}

/// Published file name of a guide.
pub fn guide_file_name(sdk: &str, label: &str) -> String {
    format!("get_started_{sdk}_{label}.md")
}

/// Clones one SDK and stages its guide, if it has one.
pub fn collect_guide(
    git: &dyn GitOperations,
    sdk: &SdkRepo,
    clone_root: &Path,
    staging_dir: &Path,
) -> Result<Option<GuideFile>> {
    let repo_dir = clone_root.join(&sdk.name);
    git.clone_repo(&sdk.url, &repo_dir, false)?;

    let tags = git.list_tags(&repo_dir)?;
    let (label, tag) = match latest_standard_release(&tags) {
        Some(release) => {
            git.checkout(&repo_dir, &release.tag)?;
            (release.minor_label(), Some(release.tag))
        }
        None => {
            log::warn!(
                "No standard release tag in {}, using the default branch",
                sdk.url
            );
            (LATEST_LABEL.to_string(), None)
        }
    };

    let guide = repo_dir.join(GUIDE_FILE_NAME);
    if !guide.is_file() {
        log::info!("No {} in repo {}, skipping", GUIDE_FILE_NAME, sdk.name);
        return Ok(None);
    }

    log::info!(
        "Found {} for repo {} and tag {}",
        GUIDE_FILE_NAME,
        sdk.name,
        tag.as_deref().unwrap_or(&label)
    );

    let file_name = guide_file_name(&sdk.name, &label);
    let staged_path = staging_dir.join(&file_name);
    fs::copy(&guide, &staged_path)?;

    Ok(Some(GuideFile {
        sdk: sdk.name.clone(),
        label,
        tag,
        file_name,
        staged_path,
    }))
}

/// Collects the guides of all `sdks`, in order.
pub fn collect_guides(
    git: &dyn GitOperations,
    sdks: &[SdkRepo],
    clone_root: &Path,
    staging_dir: &Path,
) -> Result<Vec<GuideFile>> {
    fs::create_dir_all(staging_dir)?;

    let mut guides = Vec::new();
    for sdk in sdks {
        if let Some(guide) = collect_guide(git, sdk, clone_root, staging_dir)? {
            guides.push(guide);
        }
    }
    Ok(guides)
}

/// Copies staged guides into the source tree and patches the index toctree.
pub fn install_guides(
    source_dir: &Path,
    guides: &[GuideFile],
    markers: &Markers,
) -> Result<PatchOutcome> {
    let guides_dir = source_dir.join(GUIDES_DIR);
    fs::create_dir_all(&guides_dir)?;

    for guide in guides {
        let destination = guides_dir.join(&guide.file_name);
        log::debug!("Copying {} to {}", guide.staged_path.display(), destination.display());
        fs::copy(&guide.staged_path, &destination)?;
    }

    let entries: Vec<TocEntry> = guides.iter().map(GuideFile::toc_entry).collect();
    toctree::patch_file(
        &source_dir.join(INDEX_FILE_NAME),
        &entries,
        markers,
        PatchMode::Write,
    )
}

/// Runs the whole get-started pipeline against `source_dir`.
pub fn run(git: &dyn GitOperations, config: &Config, source_dir: &Path) -> Result<GetStartedReport> {
    let index = source_dir.join(INDEX_FILE_NAME);
    if !index.is_file() {
        return Err(Error::MissingFile { path: index });
    }

    let scratch = tempfile::Builder::new().prefix("sdk_doc_").tempdir()?;
    // Clones and staged guides live in sibling directories so no SDK name can
    // collide with the staging area.
    let clone_root = scratch.path().join(CLONES_DIR);
    let staging_dir = scratch.path().join(GUIDES_DIR);

    let guides = collect_guides(git, &config.sdks, &clone_root, &staging_dir)?;
    let index = install_guides(source_dir, &guides, &config.markers)?;

    Ok(GetStartedReport { guides, index })
}
