//! # Release Tag Classification
//!
//! SDK repositories publish release tags such as `v1.2.3` next to pre-release
//! tags (`v1.3.0-rc.1`) and assorted other refs. Only *standard* releases,
//! tags of the exact form `v<major>.<minor>.<patch>`, are used to pick the
//! guide that gets published.
//!
//! This module also orders release directory names from the documentation
//! repository (`"1.2"`, `"1.10"`), where plain string ordering would put
//! `1.10` before `1.2`.

use regex::Regex;
use semver::Version;
use std::cmp::Ordering;
use std::sync::LazyLock;

static STANDARD_RELEASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v([0-9]+)\.([0-9]+)\.([0-9]+)$").expect("standard release pattern is valid")
});

/// A tag of the form `v<major>.<minor>.<patch>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardRelease {
    /// The tag exactly as it appears in the repository.
    pub tag: String,
    pub version: Version,
}

impl StandardRelease {
    /// Parses a tag, returning `None` unless it is a standard release.
    pub fn parse(tag: &str) -> Option<Self> {
        let captures = STANDARD_RELEASE.captures(tag)?;
        // Components too large for u64 are not releases we can order.
        let major = captures[1].parse().ok()?;
        let minor = captures[2].parse().ok()?;
        let patch = captures[3].parse().ok()?;

        Some(Self {
            tag: tag.to_string(),
            version: Version::new(major, minor, patch),
        })
    }

    /// The `<major>.<minor>` label used in published guide names.
    pub fn minor_label(&self) -> String {
        format!("{}.{}", self.version.major, self.version.minor)
    }
}

/// Returns true iff `tag` is a standard release tag.
pub fn is_standard_release(tag: &str) -> bool {
    STANDARD_RELEASE.is_match(tag)
}

/// Finds the highest standard release among `tags`, ignoring everything else.
pub fn latest_standard_release<S: AsRef<str>>(tags: &[S]) -> Option<StandardRelease> {
    tags.iter()
        .filter_map(|tag| StandardRelease::parse(tag.as_ref()))
        .max_by(|a, b| a.version.cmp(&b.version))
}

/// Orders release directory names segment by segment.
///
/// Segments that are both numeric compare as numbers, anything else compares
/// as text. A name that is a prefix of another sorts first (`1.2 < 1.2.1`).
pub fn compare_release_names(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ordering = match (l.parse::<u64>(), r.parse::<u64>()) {
                    (Ok(l), Ok(r)) => l.cmp(&r),
                    _ => l.cmp(r),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}
