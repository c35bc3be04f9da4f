//! # Get-Started Command Implementation
//!
//! Implements `sdk-docs get-started`: clone every configured SDK, publish the
//! get-started guide of its latest standard release under
//! `<source>/get_started/` and link the guides from `<source>/get_started.md`.
//!
//! The command always writes. There is no dry-run mode because the guides
//! only exist inside the freshly cloned repositories.

use anyhow::Result;
use clap::Args;
use std::process::ExitCode;

use sdk_docs::get_started;
use sdk_docs::output::Status;
use sdk_docs::repository::SystemGit;
use sdk_docs::suggestions;

use crate::cli::Context;

/// Publish the get-started guides of all SDKs
#[derive(Args, Debug)]
pub struct GetStartedArgs {}

/// Execute the `get-started` command.
pub fn execute(_args: GetStartedArgs, ctx: &Context) -> Result<ExitCode> {
    println!(
        "{} Collecting get-started guides from {} SDK repositories",
        ctx.output.status(Status::Fetch),
        ctx.config.sdks.len()
    );

    let report = get_started::run(&SystemGit, &ctx.config, &ctx.source_dir)
        .map_err(suggestions::explain)?;

    if report.guides.is_empty() {
        println!(
            "{} No SDK repository provides a {}",
            ctx.output.status(Status::Info),
            get_started::GUIDE_FILE_NAME
        );
    }

    for guide in &report.guides {
        println!(
            "   {} -> {}/{}",
            guide.tag.as_deref().unwrap_or(&guide.label),
            get_started::GUIDES_DIR,
            guide.file_name
        );
    }

    let index_path = ctx.source_dir.join(get_started::INDEX_FILE_NAME);
    if report.index.is_changed() {
        println!(
            "{} Updated {}",
            ctx.output.status(Status::Done),
            index_path.display()
        );
    } else {
        println!(
            "{} {} is up to date",
            ctx.output.status(Status::Done),
            index_path.display()
        );
    }

    Ok(ExitCode::SUCCESS)
}
