//! # SDK Docs CLI
//!
//! This is the binary entry point for the `sdk-docs` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Mapping the command outcome to a process exit code.
//!
//! The pipelines live in the `sdk_docs` library crate; the binary is a thin
//! wrapper around them.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    cli.execute()
}
