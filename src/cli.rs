//! CLI argument parsing and command dispatch

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use sdk_docs::config::{self, Config};
use sdk_docs::output::{ColorChoice, OutputConfig};

use crate::commands;

/// SDK Docs - Generate the get-started and API toctrees of the SDK documentation
#[derive(Parser, Debug)]
#[command(name = "sdk-docs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Documentation source directory holding api_docs.md and get_started.md
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        env = "SDK_DOCS_SOURCE",
        default_value = sdk_docs::defaults::SOURCE_DIR
    )]
    source_dir: PathBuf,

    /// Configuration file (defaults to ./sdk-docs.yaml when present)
    #[arg(short, long, global = true, value_name = "FILE", env = "SDK_DOCS_CONFIG")]
    config: Option<PathBuf>,

    /// Decorate summaries with emoji
    #[arg(long, global = true, value_name = "WHEN", value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Publish the get-started guide of every SDK's latest release
    GetStarted(commands::get_started::GetStartedArgs),

    /// Link the API documentation of every SDK release
    ApiDocs(commands::api_docs::ApiDocsArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

/// Settings shared by the documentation commands.
pub struct Context {
    pub config: Config,
    pub source_dir: PathBuf,
    pub output: OutputConfig,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<ExitCode> {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level.as_str()),
        )
        .format_timestamp(None)
        .init();

        let output = OutputConfig::new(self.color);

        match self.command {
            Commands::Completions(args) => {
                commands::completions::execute(args)?;
                Ok(ExitCode::SUCCESS)
            }
            Commands::GetStarted(args) => {
                let ctx = load_context(self.config, self.source_dir, output)?;
                commands::get_started::execute(args, &ctx)
            }
            Commands::ApiDocs(args) => {
                let ctx = load_context(self.config, self.source_dir, output)?;
                commands::api_docs::execute(args, &ctx)
            }
        }
    }
}

fn load_context(
    config_path: Option<PathBuf>,
    source_dir: PathBuf,
    output: OutputConfig,
) -> Result<Context> {
    let work_dir = std::env::current_dir().context("Failed to read the working directory")?;
    let config = config::load(config_path.as_deref(), &work_dir).map_err(|e| {
        anyhow::anyhow!(
            "Failed to load config{}: {}",
            config_path
                .as_ref()
                .map(|p| format!(" from {}", p.display()))
                .unwrap_or_default(),
            e
        )
    })?;

    Ok(Context {
        config,
        source_dir,
        output,
    })
}
