//! cadence-recipes CLI — browse and validate the Cadence recipe catalog.
//!
//! Provides five commands: `list`, `show`, `paths`, `check`, and `export`.
//! All of them read from the built-in [`cadence_recipes_core::catalog::Catalog`].

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cadence-recipes",
    about = "Catalog of Cadence recipes — contract and transaction samples with explanations",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to recipes.config.json (default: ./recipes.config.json)
    #[arg(long, global = true, default_value = cadence_recipes_core::config::CONFIG_FILE)]
    config: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List every recipe in the catalog
    List,

    /// Show all fields of one recipe
    Show {
        /// Recipe slug (e.g. create-a-topshot-set)
        slug: String,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the contract, transaction, and explanation paths of a recipe
    Paths {
        /// Recipe slug
        slug: String,

        /// Content root to resolve against (overrides the config file)
        #[arg(long, env = "CADENCE_RECIPES_ROOT")]
        root: Option<PathBuf>,
    },

    /// Check that the files referenced by recipes exist under the content root
    Check {
        /// Only check this recipe (default: all)
        slug: Option<String>,

        /// Content root to check against (overrides the config file)
        #[arg(long, env = "CADENCE_RECIPES_ROOT")]
        root: Option<PathBuf>,
    },

    /// Export the catalog as JSON
    Export {
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

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
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::List => commands::list::run()?,
        Commands::Show { slug, json } => commands::show::run(&slug, json)?,
        Commands::Paths { slug, root } => {
            commands::paths::run(&cli.config, &slug, root.as_deref())?;
        }
        Commands::Check { slug, root } => {
            commands::check::run(&cli.config, slug.as_deref(), root.as_deref()).await?;
        }
        Commands::Export { output } => commands::export::run(output.as_deref())?,
    }

    Ok(())
}
