//! # Toctree Patching
//!
//! The documentation index files (`get_started.md`, `api_docs.md`) each hold a
//! MyST toctree directive whose body is a list of links:
//!
//! ````markdown
//! ```{toctree}
//! :maxdepth: 1
//! Rust APIs <https://docs.example.org/device-sdks/rust/0.8/api>
//! Go APIs <api_docs/go.md>
//! ```
//! ````
//!
//! The *region* is the run of lines strictly between the start marker
//! (`:maxdepth: 1`) and the first end marker (a closing fence) after it.
//! Patching puts the new entries ahead of the lines already in the region,
//! drops every line equal to an earlier one (line endings aside), and leaves the rest of the file
//! untouched byte for byte. Applying the same entries twice is a no-op.
//!
//! The pure part (`patch_lines`, `patch_content`) works on strings so it can
//! be tested without a filesystem; `patch_file` wraps it with I/O and a
//! check-only mode.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// Default prefix of the line that opens the patchable region.
pub const DEFAULT_START_MARKER: &str = ":maxdepth: 1";

/// Default prefix of the line that closes the patchable region.
pub const DEFAULT_END_MARKER: &str = "```";

/// Line prefixes delimiting the patchable region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Markers {
    #[serde(default = "default_start_marker")]
    pub start: String,
    #[serde(default = "default_end_marker")]
    pub end: String,
}

fn default_start_marker() -> String {
    DEFAULT_START_MARKER.to_string()
}

fn default_end_marker() -> String {
    DEFAULT_END_MARKER.to_string()
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: default_start_marker(),
            end: default_end_marker(),
        }
    }
}

/// One toctree link, rendered as `title <target>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TocEntry {
    pub title: String,
    pub target: String,
}

impl TocEntry {
    pub fn new(title: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            target: target.into(),
        }
    }

    /// The entry as a file line, newline included.
    pub fn to_line(&self) -> String {
        format!("{self}\n")
    }
}

impl fmt::Display for TocEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.title, self.target)
    }
}

/// Line indices of a region: `start` is the first line after the start
/// marker, `end` is the index of the end marker line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: usize,
    pub end: usize,
}

/// Which marker was missing when locating a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingMarker {
    Start,
    End,
}

impl MissingMarker {
    fn kind(self) -> &'static str {
        match self {
            MissingMarker::Start => "start",
            MissingMarker::End => "end",
        }
    }

    fn into_error(self, path: &Path, markers: &Markers) -> Error {
        let marker = match self {
            MissingMarker::Start => &markers.start,
            MissingMarker::End => &markers.end,
        };
        Error::MarkerNotFound {
            path: path.to_path_buf(),
            kind: self.kind(),
            marker: marker.clone(),
        }
    }
}

/// Whether `patch_file` may write the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchMode {
    Write,
    Check,
}

/// Result of patching a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Unchanged,
    /// The content differs; in `PatchMode::Write` it was written.
    Changed,
}

impl PatchOutcome {
    pub fn is_changed(self) -> bool {
        self == PatchOutcome::Changed
    }
}

/// Capitalizes a name for display: first character upper case, the rest
/// lower case (`qt5` -> `Qt5`, `csharp` -> `Csharp`).
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Splits content into lines, each keeping its terminator.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split_inclusive('\n').collect()
}

/// Locates the patchable region.
///
/// The start is the first line beginning with `markers.start`; the end is the
/// first line after it beginning with `markers.end`.
pub fn find_region<S: AsRef<str>>(
    lines: &[S],
    markers: &Markers,
) -> std::result::Result<Region, MissingMarker> {
    let start = lines
        .iter()
        .position(|line| line.as_ref().starts_with(&markers.start))
        .map(|idx| idx + 1)
        .ok_or(MissingMarker::Start)?;

    let end = lines[start..]
        .iter()
        .position(|line| line.as_ref().starts_with(&markers.end))
        .map(|offset| start + offset)
        .ok_or(MissingMarker::End)?;

    Ok(Region { start, end })
}

/// Strips a trailing `\n` or `\r\n`.
fn line_content(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// The terminator of `line`, defaulting to `\n`.
fn line_ending(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

/// Prepends `new` to `existing` and removes repeated lines, keeping the
/// first occurrence of each. Lines compare without their terminators.
pub fn merge_entries<'a>(new: &'a [String], existing: &[&'a str]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    new.iter()
        .map(String::as_str)
        .chain(existing.iter().copied())
        .filter(|line| seen.insert(line_content(line)))
        .collect()
}

/// Computes the patched lines for a file split with `split_lines`.
pub fn patch_lines<'a>(
    lines: &[&'a str],
    new_lines: &'a [String],
    markers: &Markers,
) -> std::result::Result<Vec<&'a str>, MissingMarker> {
    let region = find_region(lines, markers)?;
    let merged = merge_entries(new_lines, &lines[region.start..region.end]);

    let mut patched = Vec::with_capacity(region.start + merged.len() + lines.len() - region.end);
    patched.extend_from_slice(&lines[..region.start]);
    patched.extend(merged);
    patched.extend_from_slice(&lines[region.end..]);
    Ok(patched)
}

/// Patches whole file content, returning the new content.
pub fn patch_content(
    content: &str,
    entries: &[TocEntry],
    markers: &Markers,
) -> std::result::Result<String, MissingMarker> {
    let lines = split_lines(content);
    let region = find_region(&lines, markers)?;
    // New entries follow the start marker's line ending.
    let ending = line_ending(lines[region.start - 1]);
    let new_lines: Vec<String> = entries
        .iter()
        .map(|entry| format!("{entry}{ending}"))
        .collect();
    Ok(patch_lines(&lines, &new_lines, markers)?.concat())
}

/// Patches the toctree region of the file at `path`.
///
/// In `PatchMode::Check` nothing is written. In `PatchMode::Write` the file
/// is rewritten only when its content changes.
pub fn patch_file(
    path: &Path,
    entries: &[TocEntry],
    markers: &Markers,
    mode: PatchMode,
) -> Result<PatchOutcome> {
    if !path.is_file() {
        return Err(Error::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let current = fs::read_to_string(path)?;
    let patched =
        patch_content(&current, entries, markers).map_err(|m| m.into_error(path, markers))?;

    if patched == current {
        log::debug!("Toctree of {} is up to date", path.display());
        return Ok(PatchOutcome::Unchanged);
    }

    if mode == PatchMode::Write {
        log::info!("Updating toctree of {}", path.display());
        fs::write(path, patched)?;
    }

    Ok(PatchOutcome::Changed)
}
