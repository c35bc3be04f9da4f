//! # Configuration
//!
//! `sdk-docs` runs without any configuration: the SDK list, the docs
//! repository and the public API docs URL all have built-in defaults (see
//! [`crate::defaults`]). An optional `sdk-docs.yaml` overrides any of them:
//!
//! ```yaml
//! sdks:
//!   - name: rust
//!     url: https://github.com/astarte-platform/astarte-device-sdk-rust.git
//! docs-repo: https://github.com/astarte-platform/docs.git
//! api-docs-base-url: https://docs.astarte-platform.org/device-sdks
//! api-docs-subdir: device-sdks
//! markers:
//!   start: ":maxdepth: 1"
//!   end: "```"
//! ```
//!
//! Keys that are absent keep their defaults. Parsing is followed by
//! validation, since SDK names end up in file names and the base URL ends up
//! in published links.

use crate::defaults;
use crate::error::{Error, Result};
use crate::toctree::Markers;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use url::Url;

/// An SDK repository to collect a get-started guide from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SdkRepo {
    /// Short platform name, used in file names and titles (e.g. `go`).
    pub name: String,
    /// Git clone URL.
    pub url: String,
}

impl SdkRepo {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

fn default_sdks() -> Vec<SdkRepo> {
    defaults::SDK_NAMES
        .iter()
        .map(|name| SdkRepo::new(*name, defaults::sdk_repo_url(name)))
        .collect()
}

/// Complete tool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_sdks")]
    pub sdks: Vec<SdkRepo>,

    #[serde(default = "defaults::docs_repo_url")]
    pub docs_repo: String,

    #[serde(default = "defaults::api_docs_base_url")]
    pub api_docs_base_url: String,

    #[serde(default = "defaults::api_docs_subdir")]
    pub api_docs_subdir: String,

    #[serde(default)]
    pub markers: Markers,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sdks: default_sdks(),
            docs_repo: defaults::docs_repo_url(),
            api_docs_base_url: defaults::api_docs_base_url(),
            api_docs_subdir: defaults::api_docs_subdir(),
            markers: Markers::default(),
        }
    }
}

impl Config {
    /// Checks the invariants parsing alone cannot express and normalizes the
    /// base URL.
    pub fn validate(mut self) -> Result<Self> {
        let mut names = HashSet::new();
        for sdk in &self.sdks {
            if sdk.name.is_empty() {
                return Err(config_error("SDK name must not be empty", None));
            }
            if !sdk
                .name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            {
                return Err(config_error(
                    format!("Invalid SDK name: {}", sdk.name),
                    Some("Use only ASCII letters, digits, '-' and '_'"),
                ));
            }
            if !names.insert(sdk.name.as_str()) {
                return Err(config_error(
                    format!("Duplicate SDK name: {}", sdk.name),
                    Some(&format!("Remove one of the '{}' entries", sdk.name)),
                ));
            }
            if sdk.url.trim().is_empty() {
                return Err(config_error(
                    format!("SDK '{}' has an empty url", sdk.name),
                    None,
                ));
            }
            check_repo_url(&sdk.url)?;
        }

        if self.docs_repo.trim().is_empty() {
            return Err(config_error("docs-repo must not be empty", None));
        }
        check_repo_url(&self.docs_repo)?;

        let base = Url::parse(&self.api_docs_base_url)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(config_error(
                format!(
                    "api-docs-base-url must be an http(s) URL: {}",
                    self.api_docs_base_url
                ),
                None,
            ));
        }
        let trimmed_len = self.api_docs_base_url.trim_end_matches('/').len();
        self.api_docs_base_url.truncate(trimmed_len);

        let subdir = Path::new(&self.api_docs_subdir);
        if self.api_docs_subdir.is_empty() || subdir.is_absolute() {
            return Err(config_error(
                "api-docs-subdir must be a relative path inside the docs repository",
                None,
            ));
        }

        if self.markers.start.is_empty() || self.markers.end.is_empty() {
            return Err(config_error("Toctree markers must not be empty", None));
        }

        Ok(self)
    }
}

/// Git would read a URL starting with `-` as an option.
fn check_repo_url(url: &str) -> Result<()> {
    if url.starts_with('-') {
        return Err(config_error(
            format!("Invalid repository url: {url}"),
            Some("Repository urls must not start with '-'"),
        ));
    }
    Ok(())
}

fn config_error(message: impl Into<String>, hint: Option<&str>) -> Error {
    Error::ConfigParse {
        message: message.into(),
        hint: hint.map(str::to_string),
    }
}

/// Parses and validates configuration YAML.
///
/// An empty document yields the defaults.
pub fn parse(yaml_content: &str) -> Result<Config> {
    if yaml_content.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_yaml::from_str(yaml_content).map_err(|e| Error::ConfigParse {
        message: e.to_string(),
        hint: Some("Known keys: sdks, docs-repo, api-docs-base-url, api-docs-subdir, markers".into()),
    })?;
    config.validate()
}

/// Reads and parses a configuration file.
pub fn from_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

/// Loads the configuration for a run.
///
/// An explicit path must exist. Without one, `sdk-docs.yaml` in `work_dir`
/// is used when present and the built-in defaults otherwise.
pub fn load(explicit: Option<&Path>, work_dir: &Path) -> Result<Config> {
    match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(Error::MissingFile {
                    path: path.to_path_buf(),
                });
            }
            from_file(path)
        }
        None => {
            let default_path = work_dir.join(defaults::CONFIG_FILE_NAME);
            if default_path.is_file() {
                log::debug!("Using configuration {}", default_path.display());
                from_file(&default_path)
            } else {
                log::debug!("No configuration file, using built-in defaults");
                Ok(Config::default())
            }
        }
    }
}
