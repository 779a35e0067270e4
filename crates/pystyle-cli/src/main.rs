//! pystyle CLI tool.
//!
//! Usage:
//! ```bash
//! pystyle [OPTIONS] <PATH>
//! pystyle check [OPTIONS] <PATH>
//! pystyle list-rules
//! pystyle init
//! ```

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;
mod source_reader;

/// PEP 8 style checker for Python source files
#[derive(Parser)]
#[command(name = "pystyle")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true, arg_required_else_help = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    check: CheckArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a Python file, or the .py files directly inside a directory
    Check(CheckArgs),

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Arguments shared by the bare invocation and `check`.
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// File or directory to analyze (default: current directory)
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Exclude patterns (can be specified multiple times)
    #[arg(short, long)]
    pub exclude: Vec<String>,
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `<path>: Line <n>: <code> <message>` per issue.
    #[default]
    Text,
    /// JSON array of issues.
    Json,
    /// Diagnostics with source snippets.
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Check(args)) => commands::check::run(args, cli.config.as_deref()),
        Some(Commands::ListRules) => {
            commands::list_rules::run();
            Ok(())
        }
        Some(Commands::Init { force }) => commands::init::run(force),
        None => commands::check::run(cli.check, cli.config.as_deref()),
    }
}
