//! # CLI Command Implementations
//!
//! Each subcommand of the `sdk-docs` tool lives in its own file with:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args`, calls into the
//!   `sdk_docs` library and reports the outcome.

pub mod api_docs;
pub mod completions;
pub mod get_started;
