//! Process exit codes used by the `sdk-docs` binary.
//!
//! - `0`: success, or nothing would change in a dry run
//! - `1`: error, or a dry run found files that would change
//! - `2`: invalid command-line usage (reported by clap)

/// The command succeeded.
pub const SUCCESS: u8 = 0;

/// A dry run found outputs that differ from the files on disk.
pub const CHANGES_DETECTED: u8 = 1;

/// The command failed.
pub const ERROR: u8 = 1;

/// Invalid command-line usage.
pub const USAGE: u8 = 2;
