//! Brickpack CLI - flatten Python subpackages into Databricks notebooks.

mod colors;
mod flatten;
mod order;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "brickpack")]
#[command(about = "Flatten a Python subpackage into a Databricks notebook")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Flatten a subpackage into a Databricks notebook
    Flatten {
        /// Path to the subpackage directory (default: current directory)
        path: Option<String>,

        /// Directory to write the notebook into (default: current directory)
        #[arg(short, long)]
        output: Option<String>,

        /// Enclosing package name used in qualified imports
        /// (default: the subpackage's parent directory name)
        #[arg(long)]
        package: Option<String>,
    },

    /// Resolve and print the module order without writing anything
    Order {
        /// Path to the subpackage directory (default: current directory)
        path: Option<String>,

        /// Enclosing package name used in qualified imports
        /// (default: the subpackage's parent directory name)
        #[arg(long)]
        package: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::DEBUG.into())
    } else {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Flatten {
            path,
            output,
            package,
        } => flatten::execute(
            path.as_deref().unwrap_or("."),
            output.as_deref(),
            package.as_deref(),
        )?,

        Commands::Order { path, package } => {
            order::execute(path.as_deref().unwrap_or("."), package.as_deref())?;
        }
    }

    Ok(())
}
