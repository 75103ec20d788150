//! comet CLI — scaffolding for go-comet projects.
//!
//! Provides three commands: `new`, `add`, and `run`.
//!
//! Generation is delegated to [`comet_core`]; this crate only parses arguments,
//! loads the config and templates, and prints results.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use comet_core::config::CONFIG_FILE;

#[derive(Parser)]
#[command(
    name = "comet",
    about = "CLI tool for go-comet projects",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to comet.config.json (default: ./comet.config.json)
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new comet project with the selected name
    New {
        /// Project name (creates a directory with this name)
        project_name: String,

        /// Go module path (e.g. github.com/me/myapp)
        module: String,
    },

    /// Add a controller, service or middleware
    Add {
        /// Component kind: controller, service, middleware
        kind: String,

        /// Component name in PascalCase (e.g. UserAccount)
        name: String,

        /// Target directory (default: current directory)
        location: Option<PathBuf>,
    },

    /// Run the comet project in the current directory
    Run,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Usage errors exit with 1 like every other failure; help and version still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::New {
            project_name,
            module,
        } => {
            commands::new::run(&cli.config, &project_name, &module).await?;
        }
        Commands::Add {
            kind,
            name,
            location,
        } => {
            commands::add::run(&cli.config, &kind, &name, location.as_deref())?;
        }
        Commands::Run => {
            commands::run::run(&cli.config).await?;
        }
    }

    Ok(())
}
