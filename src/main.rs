//! octocompose - Docker Compose operator
//!
//! This is the main CLI entry point.

use anyhow::Context;
use clap::{Parser, Subcommand};
use octocompose::compose::ComposeWriter;
use octocompose::config::ConfigSource;
use octocompose::dispatch::{ComposeAction, SystemRunner, INTERNAL_ERROR_EXIT_CODE};
use octocompose::logging::{self, LogLevel};
use octocompose::Invocation;
use std::path::PathBuf;

/// octocompose - run octocompose configurations with docker compose
#[derive(Parser)]
#[command(name = "octocompose")]
#[command(version)]
#[command(about = "Docker Compose Operator", long_about = None)]
struct Cli {
    /// Set the log level
    #[arg(short, long, global = true, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Configuration file (JSON); standard input when omitted or "-"
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Cache root for generated compose files (defaults to the user cache dir)
    #[arg(long, global = true)]
    cache_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run docker compose up -d
    Start {
        #[arg(long)]
        dry_run: bool,
    },

    /// Run docker compose down
    Stop {
        #[arg(long)]
        dry_run: bool,
    },

    /// Run docker compose restart
    Restart {
        #[arg(long)]
        dry_run: bool,
    },

    /// Run docker compose logs
    Logs {
        /// Follow the logs
        #[arg(short, long)]
        follow: bool,
        /// Services to show
        services: Vec<String>,
    },

    /// Run docker compose ps -a
    Status,

    /// Run docker compose config
    Show,

    /// Run arbitrary docker compose commands given after `--`
    Compose {
        /// Arguments before `--` are ignored
        #[arg(hide = true)]
        ignored: Vec<String>,
        #[arg(last = true)]
        args: Vec<String>,
    },

    /// Run docker compose exec
    Exec {
        /// Service and command
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

impl From<Commands> for ComposeAction {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Start { dry_run } => ComposeAction::Start { dry_run },
            Commands::Stop { dry_run } => ComposeAction::Stop { dry_run },
            Commands::Restart { dry_run } => ComposeAction::Restart { dry_run },
            Commands::Logs { follow, services } => ComposeAction::Logs { follow, services },
            Commands::Status => ComposeAction::Status,
            Commands::Show => ComposeAction::Show,
            Commands::Compose { args, .. } => ComposeAction::Compose { args },
            Commands::Exec { args } => ComposeAction::Exec { args },
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            INTERNAL_ERROR_EXIT_CODE
        }
    };

    std::process::exit(code);
}

async fn run(cli: Cli) -> anyhow::Result<i32> {
    let action = ComposeAction::from(cli.command);

    let writer = match cli.cache_dir {
        Some(dir) => ComposeWriter::new(dir),
        None => ComposeWriter::from_user_cache()?,
    };

    let source = ConfigSource::from_flag(cli.config);
    let invocation = Invocation::prepare(&source, &writer)
        .with_context(|| format!("while preparing config from {}", source))?;

    invocation
        .run(&action, &SystemRunner)
        .await
        .context("while running compose")
}
