//! # API Docs Command Implementation
//!
//! Implements `sdk-docs api-docs`: clone the docs repository, read which
//! releases of each platform it publishes, generate `api_docs/<platform>.md`
//! for multi-release platforms and patch the toctree of `api_docs.md`.
//!
//! ## Dry Run
//!
//! With `--dry-run` no file is written. The command prints what would change
//! and exits with status 1 when anything would, 0 otherwise, so CI can fail
//! when the committed pages are stale.

use anyhow::Result;
use clap::Args;
use std::process::ExitCode;

use sdk_docs::api_docs;
use sdk_docs::exit_codes;
use sdk_docs::output::Status;
use sdk_docs::repository::SystemGit;
use sdk_docs::suggestions;

use crate::cli::Context;

/// Link the API documentation of all SDK releases
#[derive(Args, Debug)]
pub struct ApiDocsArgs {
    /// Do not change any file, exit with 1 when the operation would have changed some file.
    #[arg(long)]
    pub dry_run: bool,
}

/// Execute the `api-docs` command.
pub fn execute(args: ApiDocsArgs, ctx: &Context) -> Result<ExitCode> {
    let config = &ctx.config;
    api_docs::ensure_index(&ctx.source_dir).map_err(suggestions::explain)?;

    println!(
        "{} Reading API docs releases from {}",
        ctx.output.status(Status::Fetch),
        config.docs_repo
    );
    let platforms =
        api_docs::fetch_platform_releases(&SystemGit, config).map_err(suggestions::explain)?;
    let index = api_docs::generate_index(&config.api_docs_base_url, &platforms);

    for (platform, releases) in &platforms {
        println!("   {}: {}", platform, releases.join(", "));
    }

    if args.dry_run {
        let report = api_docs::check_outputs(&ctx.source_dir, &index, &config.markers)
            .map_err(suggestions::explain)?;

        if report.is_up_to_date() {
            println!("{} No changes needed.", ctx.output.status(Status::Done));
            return Ok(ExitCode::from(exit_codes::SUCCESS));
        }

        println!("{} Changes needed:", ctx.output.status(Status::Warn));
        for page in &report.stale_pages {
            println!("  ~ {}/{}", api_docs::PAGES_DIR, page);
        }
        if report.index_changed {
            println!("  ~ {}", api_docs::INDEX_FILE_NAME);
        }
        return Ok(ExitCode::from(exit_codes::CHANGES_DETECTED));
    }

    let report = api_docs::store_outputs(&ctx.source_dir, &index, &config.markers)
        .map_err(suggestions::explain)?;

    for page in &report.written_pages {
        println!("  + {}/{}", api_docs::PAGES_DIR, page);
    }
    if report.index.is_changed() {
        println!(
            "{} Updated {}",
            ctx.output.status(Status::Done),
            api_docs::INDEX_FILE_NAME
        );
    } else {
        println!(
            "{} {} is up to date",
            ctx.output.status(Status::Done),
            api_docs::INDEX_FILE_NAME
        );
    }

    Ok(ExitCode::SUCCESS)
}
